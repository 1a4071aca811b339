//! Helpers shared by the integration tests.

use deriv_parser::parser::ast::{Constant, Expr, Func, Leaf};
use std::f64::consts::{E, PI};

/// Evaluates an expression of the single variable `x`.
pub fn eval(expr: &Expr, x: f64) -> f64 {
    match expr {
        Expr::Leaf(Leaf::Number(n)) => *n,
        Expr::Leaf(Leaf::Constant(Constant::Pi)) => PI,
        Expr::Leaf(Leaf::Constant(Constant::E)) => E,
        Expr::Leaf(Leaf::Symbol { coefficient, name: 'x' }) => coefficient.unwrap_or(1.0) * x,
        Expr::Leaf(leaf) => panic!("cannot evaluate `{}`", leaf),
        Expr::Call(call) => {
            let u = eval(&call.arg, x);
            let value = match call.func {
                Func::Abs => u.abs(),
                Func::Sin => u.sin(),
                Func::Cos => u.cos(),
                Func::Tan => u.tan(),
                Func::Sec => 1.0 / u.cos(),
                Func::Csc => 1.0 / u.sin(),
                Func::Cot => 1.0 / u.tan(),
                Func::Arcsin => u.asin(),
                Func::Arccos => u.acos(),
                Func::Arctan => u.atan(),
                Func::Arcsec => (1.0 / u).acos(),
                Func::Arccsc => (1.0 / u).asin(),
                Func::Arccot => (1.0 / u).atan(),
                Func::Ln => u.ln(),
                Func::Log(None) => u.log10(),
                Func::Log(Some(base)) => u.ln() / eval(&Expr::Leaf(base), x).ln(),
            };
            call.coefficient.unwrap_or(1.0) * value
        },
        Expr::Binary(binary) => binary.op.apply(eval(&binary.lhs, x), eval(&binary.rhs, x)),
    }
}
