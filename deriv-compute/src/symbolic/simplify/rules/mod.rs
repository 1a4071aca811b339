//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules only look at the node they are given; the driver in the parent
//! module is responsible for simplifying children first.

pub mod add;
pub mod divide;
pub mod multiply;
pub mod numeric;
pub mod power;

use crate::symbolic::step_collector::StepCollector;
use deriv_parser::parser::{ast::{Binary, Expr}, op::BinOpKind};
use super::step::Step;
use tracing::trace;

/// If the expression is a binary expression with the given operator, calls the given
/// transformation function with the left and right-hand sides.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_binary(
    expr: &Expr,
    op: BinOpKind,
    f: impl FnOnce(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    match expr {
        Expr::Binary(Binary { lhs, op: expr_op, rhs }) if *expr_op == op => f(lhs, rhs),
        _ => None,
    }
}

/// Records that a step was applied.
pub(crate) fn record(step_collector: &mut dyn StepCollector<Step>, step: Step) {
    trace!(?step, "applied simplification rule");
    step_collector.push(step);
}

/// Returns true if the expression is the number `n`.
pub(crate) fn is_number(expr: &Expr, n: f64) -> bool {
    expr.as_number() == Some(n)
}

/// Creates a number leaf, normalizing `-0` to `0`.
pub(crate) fn number(n: f64) -> Expr {
    Expr::number(if n == 0.0 { 0.0 } else { n })
}

/// Applies all rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    numeric::all(expr, step_collector)
        .or_else(|| add::all(expr, step_collector))
        .or_else(|| multiply::all(expr, step_collector))
        .or_else(|| divide::all(expr, step_collector))
        .or_else(|| power::all(expr, step_collector))
}
