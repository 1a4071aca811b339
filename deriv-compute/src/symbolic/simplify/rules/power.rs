//! Simplification rules for power expressions.

use crate::symbolic::{
    simplify::{rules::{do_binary, is_number, number, record}, step::Step},
    step_collector::StepCollector,
};
use deriv_parser::parser::{ast::Expr, op::BinOpKind};

/// `a^0 = 1`
///
/// `0^0` is defined as `1` by this rule, matching [`f64::powf`].
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Exp, |_, rhs| {
        is_number(rhs, 0.0).then(|| number(1.0))
    })?;

    // keep the step collection logic outside of the closure
    record(step_collector, Step::PowerZero);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Exp, |lhs, rhs| {
        is_number(rhs, 1.0).then(|| lhs.clone())
    })?;

    record(step_collector, Step::PowerOne);
    Some(opt)
}

/// `0^a = 0`
///
/// Only applies when `a` is a positive number. `0^0` is handled by the [`power_zero`] rule,
/// `0^-1` is undefined, and a symbolic exponent such as `pi-e` or `x` may still be zero.
pub fn power_zero_left(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Exp, |lhs, rhs| {
        let positive = rhs.as_number().is_some_and(|n| n > 0.0);
        (is_number(lhs, 0.0) && positive).then(|| number(0.0))
    })?;

    record(step_collector, Step::PowerZeroLeft);
    Some(opt)
}

/// `1^a = 1`
pub fn power_one_left(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Exp, |lhs, _| {
        is_number(lhs, 1.0).then(|| number(1.0))
    })?;

    record(step_collector, Step::PowerOneLeft);
    Some(opt)
}

/// Applies all power rules.
///
/// All power rules will reduce the complexity of the expression.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    power_zero(expr, step_collector)
        .or_else(|| power_one(expr, step_collector))
        .or_else(|| power_zero_left(expr, step_collector))
        .or_else(|| power_one_left(expr, step_collector))
}
