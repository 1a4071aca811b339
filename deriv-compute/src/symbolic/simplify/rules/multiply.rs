//! Simplification rules for products.

use crate::symbolic::{
    simplify::{rules::{do_binary, is_number, number, record}, step::Step},
    step_collector::StepCollector,
};
use deriv_parser::parser::{ast::{Call, Expr, Leaf}, op::BinOpKind};

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        (is_number(lhs, 0.0) || is_number(rhs, 0.0)).then(|| number(0.0))
    })?;

    record(step_collector, Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        if is_number(lhs, 1.0) {
            Some(rhs.clone())
        } else if is_number(rhs, 1.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    record(step_collector, Step::MultiplyOne);
    Some(opt)
}

/// `a*a = a^2`
/// `2a*3a = 6*a^2`
pub fn combine_like_factors(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        let (lhs_coefficient, lhs_name) = lhs.as_symbol()?;
        let (rhs_coefficient, rhs_name) = rhs.as_symbol()?;
        if lhs_name != rhs_name {
            return None;
        }

        let square = Expr::symbol(lhs_name).pow(Expr::number(2.0));
        let coefficient = lhs_coefficient * rhs_coefficient;
        if coefficient == 1.0 {
            Some(square)
        } else {
            Some(number(coefficient) * square)
        }
    })?;

    record(step_collector, Step::CombineLikeFactors);
    Some(opt)
}

/// Multiplies the coefficient of a variable or function call by `n`.
fn scale(expr: &Expr, n: f64) -> Option<Expr> {
    match expr {
        Expr::Leaf(Leaf::Symbol { coefficient, name }) => {
            Some(Expr::coefficient_symbol(n * coefficient.unwrap_or(1.0), *name))
        },
        Expr::Call(call) => Some(Expr::Call(Call {
            coefficient: Some(n * call.coefficient.unwrap_or(1.0)),
            func: call.func,
            arg: call.arg.clone(),
        })),
        _ => None,
    }
}

/// `3*2a = 6a`
/// `sin(a)*3 = 3sin(a)`
pub fn multiply_coefficient(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        match (lhs.as_number(), rhs.as_number()) {
            (Some(n), None) => scale(rhs, n),
            (None, Some(n)) => scale(lhs, n),
            _ => None,
        }
    })?;

    record(step_collector, Step::MultiplyCoefficient);
    Some(opt)
}

/// Applies all product rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_zero(expr, step_collector)
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| combine_like_factors(expr, step_collector))
        .or_else(|| multiply_coefficient(expr, step_collector))
}
