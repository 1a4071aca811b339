use super::{expr::Expr, leaf::{split_finite_coefficient, Constant, Leaf}};
use std::fmt;

/// A function from the closed registry of functions the calculator understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Func {
    Abs,
    Sin,
    Cos,
    Tan,
    Sec,
    Csc,
    Cot,
    Arcsin,
    Arccos,
    Arctan,
    Arcsec,
    Arccsc,
    Arccot,
    Ln,

    /// A logarithm, `log` or `log_<base>`. Without a base, the logarithm is base 10 by
    /// convention. The base is always a number or a constant.
    Log(Option<Leaf>),
}

impl Func {
    /// Every function without a configurable base, in registry order.
    pub const SIMPLE: [Func; 14] = [
        Func::Abs,
        Func::Sin,
        Func::Cos,
        Func::Tan,
        Func::Sec,
        Func::Csc,
        Func::Cot,
        Func::Arcsin,
        Func::Arccos,
        Func::Arctan,
        Func::Arcsec,
        Func::Arccsc,
        Func::Arccot,
        Func::Ln,
    ];

    /// Returns the function with the given name, such as `sin` or `log_2`.
    pub fn from_name(name: &str) -> Option<Self> {
        let func = match name {
            "abs" => Self::Abs,
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "sec" => Self::Sec,
            "csc" => Self::Csc,
            "cot" => Self::Cot,
            "arcsin" => Self::Arcsin,
            "arccos" => Self::Arccos,
            "arctan" => Self::Arctan,
            "arcsec" => Self::Arcsec,
            "arccsc" => Self::Arccsc,
            "arccot" => Self::Arccot,
            "ln" => Self::Ln,
            "log" => Self::Log(None),
            name => {
                let base = name.strip_prefix("log_")?;
                let base = match Constant::from_name(base) {
                    Some(constant) => Leaf::Constant(constant),
                    None => Leaf::Number(base.parse::<f64>().ok().filter(|n| n.is_finite())?),
                };
                Self::Log(Some(base))
            },
        };
        Some(func)
    }

    /// Returns the function named by the given call name, along with the numeric coefficient
    /// written in front of it, if any (`3sin` is `sin` with coefficient `3`).
    pub fn from_call_name(name: &str) -> Option<(Option<f64>, Self)> {
        let (coefficient, rest) = split_finite_coefficient(name)?;
        Some((coefficient, Self::from_name(rest)?))
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Abs => "abs",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sec => "sec",
            Self::Csc => "csc",
            Self::Cot => "cot",
            Self::Arcsin => "arcsin",
            Self::Arccos => "arccos",
            Self::Arctan => "arctan",
            Self::Arcsec => "arcsec",
            Self::Arccsc => "arccsc",
            Self::Arccot => "arccot",
            Self::Ln => "ln",
            Self::Log(None) => "log",
            Self::Log(Some(base)) => return write!(f, "log_{}", base),
        };
        f.write_str(name)
    }
}

/// A function applied to a single argument, such as `sin(x)` or `3cos(2x)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// A numeric coefficient multiplying the whole call. The parser only produces this when the
    /// coefficient is written directly in front of the function name; the simplifier produces it
    /// when folding a number into a call.
    pub coefficient: Option<f64>,

    /// The function being applied.
    pub func: Func,

    /// The argument of the function.
    pub arg: Box<Expr>,
}

impl Call {
    /// Creates a call with no coefficient.
    pub fn new(func: Func, arg: Expr) -> Self {
        Self {
            coefficient: None,
            func,
            arg: Box::new(arg),
        }
    }

    /// Returns the same call with its coefficient removed.
    pub fn without_coefficient(&self) -> Self {
        Self {
            coefficient: None,
            func: self.func,
            arg: self.arg.clone(),
        }
    }
}
