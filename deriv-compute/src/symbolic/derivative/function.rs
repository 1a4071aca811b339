//! Derivatives of the functions in the registry.

use deriv_parser::parser::ast::{Expr, Func};

/// `1 / 2`, kept as a fraction so the square root reads as it is usually written.
fn half() -> Expr {
    Expr::number(1.0) / Expr::number(2.0)
}

/// `(u ^ 2)`
fn squared(u: &Expr) -> Expr {
    u.clone().pow(Expr::number(2.0))
}

/// `0 - u`
fn negate(u: Expr) -> Expr {
    Expr::number(0.0) - u
}

/// `1 / ((1 - (u ^ 2)) ^ (1 / 2))`
fn arcsin(u: &Expr) -> Expr {
    Expr::number(1.0) / (Expr::number(1.0) - squared(u)).pow(half())
}

/// `1 / ((u ^ 2) + 1)`
fn arctan(u: &Expr) -> Expr {
    Expr::number(1.0) / (squared(u) + Expr::number(1.0))
}

/// `1 / (abs(u) * (((u ^ 2) - 1) ^ (1 / 2)))`
fn arcsec(u: &Expr) -> Expr {
    Expr::number(1.0)
        / (Expr::call(Func::Abs, u.clone()) * (squared(u) - Expr::number(1.0)).pow(half()))
}

/// Returns the derivative of `func` with respect to its argument, evaluated at `u`.
///
/// This is the outer factor of the chain rule; the caller multiplies it by the derivative of `u`
/// when needed.
pub(super) fn table(func: Func, u: &Expr) -> Expr {
    let call = |func: Func| Expr::call(func, u.clone());
    match func {
        // abs(u)' = u / abs(u)
        Func::Abs => u.clone() / call(Func::Abs),
        Func::Sin => call(Func::Cos),
        Func::Cos => negate(call(Func::Sin)),
        Func::Tan => call(Func::Sec).pow(Expr::number(2.0)),
        Func::Sec => call(Func::Sec) * call(Func::Tan),
        Func::Csc => negate(call(Func::Csc) * call(Func::Cot)),
        Func::Cot => negate(call(Func::Csc).pow(Expr::number(2.0))),
        Func::Arcsin => arcsin(u),
        Func::Arccos => negate(arcsin(u)),
        Func::Arctan => arctan(u),
        Func::Arccot => negate(arctan(u)),
        Func::Arcsec => arcsec(u),
        Func::Arccsc => negate(arcsec(u)),
        Func::Ln | Func::Log(None) => Expr::number(1.0) / u.clone(),
        Func::Log(Some(base)) => {
            Expr::number(1.0) / (u.clone() * Expr::call(Func::Ln, Expr::Leaf(base)))
        },
    }
}
