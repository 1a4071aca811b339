//! Simplification rules for sums and differences.

use crate::symbolic::{
    simplify::{rules::{do_binary, is_number, number, record}, step::Step},
    step_collector::StepCollector,
};
use deriv_parser::parser::{ast::Expr, op::BinOpKind};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Add, |lhs, rhs| {
        if is_number(lhs, 0.0) {
            Some(rhs.clone())
        } else if is_number(rhs, 0.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    record(step_collector, Step::AddZero);
    Some(opt)
}

/// `a-0 = a`
pub fn subtract_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
        is_number(rhs, 0.0).then(|| lhs.clone())
    })?;

    record(step_collector, Step::SubtractZero);
    Some(opt)
}

/// `a-a = 0`
///
/// Only applies when both sides are written identically. Numbers are left to
/// [`fold_constants`](super::numeric::fold_constants), and single variables to
/// [`combine_like_terms`]. Constants and Leibniz terms are handled here (`pi-pi = 0`).
pub fn subtract_self(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
        let handled_elsewhere = lhs.is_numeric() || lhs.as_symbol().is_some();
        (!handled_elsewhere && lhs == rhs).then(|| number(0.0))
    })?;

    record(step_collector, Step::SubtractSelf);
    Some(opt)
}

/// `a+a = 2a`
/// `2a-1a = 1a`
/// `3a-3a = 0`
///
/// Only applies when both sides are the same variable, each with an optional coefficient.
pub fn combine_like_terms(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Binary(binary) = expr else {
        return None;
    };
    if !matches!(binary.op, BinOpKind::Add | BinOpKind::Sub) {
        return None;
    }

    let (lhs_coefficient, lhs_name) = binary.lhs.as_symbol()?;
    let (rhs_coefficient, rhs_name) = binary.rhs.as_symbol()?;
    if lhs_name != rhs_name {
        return None;
    }

    let coefficient = binary.op.apply(lhs_coefficient, rhs_coefficient);
    let opt = if coefficient == 0.0 {
        number(0.0)
    } else {
        Expr::coefficient_symbol(coefficient, lhs_name)
    };

    record(step_collector, Step::CombineLikeTerms);
    Some(opt)
}

/// Applies all sum and difference rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_zero(expr, step_collector)
        .or_else(|| subtract_zero(expr, step_collector))
        .or_else(|| subtract_self(expr, step_collector))
        .or_else(|| combine_like_terms(expr, step_collector))
}
