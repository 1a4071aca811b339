mod function;
mod power;

use deriv_parser::parser::{
    ast::{Binary, Call, Expr, Leaf},
    op::BinOpKind,
};
use tracing::{debug, trace};

/// The state shared by every step of a single differentiation.
#[derive(Debug, Clone, Copy)]
struct Ctxt {
    /// The variable we are differentiating with respect to.
    with: char,

    /// The other variable found in the expression, if any. It is treated as an implicit function
    /// of `with`.
    other: Option<char>,
}

impl Ctxt {
    /// Returns true if the expression depends on the differentiation variable or the implicit
    /// variable.
    fn depends(&self, expr: &Expr) -> bool {
        expr.contains_symbol(self.with)
            || self.other.is_some_and(|other| expr.contains_symbol(other))
    }

    /// Returns the Leibniz term `d<name>/d<with>`.
    fn leibniz(&self, name: char) -> Expr {
        Expr::leibniz(name, self.with)
    }

    /// Differentiates any expression.
    fn derive(&self, expr: &Expr) -> Expr {
        match expr {
            Expr::Leaf(leaf) => self.leaf(leaf),
            Expr::Call(call) => self.call(call),
            Expr::Binary(binary) => self.binary(binary),
        }
    }

    /// Differentiates a leaf.
    ///
    /// - `c' = 0`
    /// - `x' = 1`
    /// - `(5x)' = 5`
    /// - `y' = dy/dx`
    /// - `(5y)' = 5 * dy/dx`
    fn leaf(&self, leaf: &Leaf) -> Expr {
        match *leaf {
            Leaf::Symbol { coefficient, name } if name == self.with => {
                Expr::number(coefficient.unwrap_or(1.0))
            },
            Leaf::Symbol { coefficient: None, name } => self.leibniz(name),
            Leaf::Symbol { coefficient: Some(coefficient), name } => {
                Expr::number(coefficient) * self.leibniz(name)
            },
            Leaf::Number(_) | Leaf::Constant(_) | Leaf::Derivative { .. } => Expr::number(0.0),
        }
    }

    /// Differentiates a binary expression.
    fn binary(&self, binary: &Binary) -> Expr {
        let Binary { lhs, op, rhs } = binary;
        match op {
            BinOpKind::Add | BinOpKind::Sub => {
                trace!(%op, "sum rule");
                Expr::binary(self.derive(lhs), *op, self.derive(rhs))
            },
            BinOpKind::Mul => product_rule(self, lhs, rhs),
            BinOpKind::Div => quotient_rule(self, lhs, rhs),
            BinOpKind::Exp => power::power(self, lhs, rhs),
        }
    }

    /// Differentiates a function call, applying the chain rule where needed.
    fn call(&self, call: &Call) -> Expr {
        if let Some(coefficient) = call.coefficient {
            // (c * f(u))' = c * f(u)'
            return Expr::number(coefficient) * self.call(&call.without_coefficient());
        }

        let arg = &*call.arg;
        match arg {
            Expr::Binary(_) | Expr::Call(_) => {
                trace!(func = %call.func, "chain rule");
                function::table(call.func, arg) * self.derive(arg)
            },
            Expr::Leaf(Leaf::Symbol { coefficient: None, name }) if *name == self.with => {
                function::table(call.func, arg)
            },
            Expr::Leaf(Leaf::Symbol { coefficient: None, name }) => {
                trace!(func = %call.func, variable = %name, "implicit chain rule");
                self.leibniz(*name) * function::table(call.func, arg)
            },
            Expr::Leaf(Leaf::Symbol { coefficient: Some(_), .. }) => {
                trace!(func = %call.func, "chain rule");
                function::table(call.func, arg) * self.derive(arg)
            },
            Expr::Leaf(_) => Expr::number(0.0),
        }
    }
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(ctxt: &Ctxt, lhs: &Expr, rhs: &Expr) -> Expr {
    trace!("product rule");
    ctxt.derive(lhs) * rhs.clone() + lhs.clone() * ctxt.derive(rhs)
}

/// `(f / g)' = (f' * g - f * g') / (g ^ 2)`
fn quotient_rule(ctxt: &Ctxt, lhs: &Expr, rhs: &Expr) -> Expr {
    trace!("quotient rule");
    (ctxt.derive(lhs) * rhs.clone() - lhs.clone() * ctxt.derive(rhs))
        / rhs.clone().pow(Expr::number(2.0))
}

/// Computes the derivative of the given expression with respect to the variable `with`.
///
/// The first letter in the expression other than `with` (scanning left to right) is treated as
/// an implicit function of `with`; its derivative appears in the result as the Leibniz term
/// `d<letter>/d<with>`. The constants `pi` and `e` are never variables.
///
/// No simplification is done. Pass the result to [`simplify`](super::simplify) to tidy it up.
pub fn derivative(expr: &Expr, with: char) -> Expr {
    let other = expr.symbols().into_iter().find(|&name| name != with);
    if let Some(other) = other {
        debug!(%with, %other, "differentiating with an implicit variable");
    }
    Ctxt { with, other }.derive(expr)
}
