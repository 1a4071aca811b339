use std::fmt;

/// A named mathematical constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// `pi`, the ratio of a circle's circumference to its diameter.
    Pi,

    /// `e`, Euler's number.
    E,
}

impl Constant {
    /// Returns the constant with the given name, if any.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" => Some(Self::Pi),
            "e" => Some(Self::E),
            _ => None,
        }
    }

    /// Returns the name of the constant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
        }
    }
}

/// A leaf of the expression tree: a number, a constant, a (possibly coefficiented) variable, or a
/// Leibniz derivative placeholder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Leaf {
    /// A number, such as `5`, `-2` or `3.14`.
    Number(f64),

    /// A named constant, such as `pi`.
    Constant(Constant),

    /// A single-letter variable with an optional numeric coefficient, such as `x` or `5x`.
    Symbol {
        /// The coefficient written in front of the variable, if any.
        coefficient: Option<f64>,

        /// The variable's letter.
        name: char,
    },

    /// The unknown derivative of the variable `of` with respect to the variable `with`, written
    /// `d<of>/d<with>`.
    Derivative {
        of: char,
        with: char,
    },
}

/// Splits a leading numeric coefficient (`2`, `-0.5`, or a lone `-`) from the rest of a name.
///
/// Returns [`None`] if the coefficient is present but not a valid number. An overlong coefficient
/// is returned as an infinity; see [`split_finite_coefficient`].
pub(crate) fn split_coefficient(name: &str) -> Option<(Option<f64>, &str)> {
    let end = name
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (c == '-' && i == 0)))
        .map_or(name.len(), |(i, _)| i);
    let (prefix, rest) = name.split_at(end);

    let coefficient = match prefix {
        "" => None,
        "-" => Some(-1.0),
        prefix => Some(prefix.parse::<f64>().ok()?),
    };
    Some((coefficient, rest))
}

/// Like [`split_coefficient`], but also returns [`None`] if the coefficient does not fit in an
/// `f64`.
pub(crate) fn split_finite_coefficient(name: &str) -> Option<(Option<f64>, &str)> {
    split_coefficient(name).filter(|(coefficient, _)| coefficient.iter().all(|c| c.is_finite()))
}

impl Leaf {
    /// Parses a name such as `x`, `2.5y` or `pi` into a leaf.
    ///
    /// Returns [`None`] if the name is not a constant or a single-letter variable. The letter `e`
    /// is always Euler's number, never a variable.
    pub fn from_name(name: &str) -> Option<Self> {
        if let Some(constant) = Constant::from_name(name) {
            return Some(Self::Constant(constant));
        }

        let (coefficient, rest) = split_finite_coefficient(name)?;
        let mut chars = rest.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) if letter.is_ascii_alphabetic() && letter != 'e' => {
                Some(Self::Symbol { coefficient, name: letter })
            },
            _ => None,
        }
    }

    /// Parses a Leibniz placeholder such as `dy/dx`.
    pub fn from_leibniz(text: &str) -> Option<Self> {
        let chars = text.chars().collect::<Vec<_>>();
        match chars.as_slice() {
            ['d', of, '/', 'd', with] if of.is_ascii_alphabetic() && with.is_ascii_alphabetic() => {
                Some(Self::Derivative { of: *of, with: *with })
            },
            _ => None,
        }
    }

    /// Returns the number stored in this leaf, if it is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the variable letter of this leaf, if it is a (possibly coefficiented) variable.
    pub fn variable(&self) -> Option<char> {
        match self {
            Self::Symbol { name, .. } => Some(*name),
            _ => None,
        }
    }
}

/// Formats a number using the shortest representation that round-trips, normalizing `-0` to `0`.
pub(crate) fn fmt_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n == 0.0 {
        write!(f, "0")
    } else {
        write!(f, "{}", n)
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => fmt_number(f, *n),
            Self::Constant(constant) => f.write_str(constant.name()),
            Self::Symbol { coefficient, name } => {
                if let Some(coefficient) = coefficient {
                    fmt_number(f, *coefficient)?;
                }
                write!(f, "{}", name)
            },
            Self::Derivative { of, with } => write!(f, "d{}/d{}", of, with),
        }
    }
}
