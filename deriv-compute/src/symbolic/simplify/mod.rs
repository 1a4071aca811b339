//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which attempts to reduce the size of an
//! expression. It does this by simplifying the children of every node first, then applying
//! rewriting rules to the node itself, in multiple passes until no more rules apply anywhere in the
//! tree. Because the final pass changes nothing, simplifying an already simplified expression
//! returns it unchanged.
//!
//! The rules are local rewrites (see [`rules`]) that never change the value of the expression.
//! Anything they do not recognize is left as written.

pub mod rules;
pub mod step;

use crate::symbolic::step_collector::StepCollector;
use deriv_parser::parser::ast::{Binary, Call, Expr};
use step::Step;
use tracing::debug;

/// Runs one bottom-up pass over the expression.
///
/// Returns the new expression, and whether any rule was applied during the pass.
fn simplify_pass(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> (Expr, bool) {
    let mut changed = false;

    // simplify the children first
    let mut expr = match expr {
        Expr::Leaf(leaf) => Expr::Leaf(*leaf),
        Expr::Call(call) => {
            let (arg, arg_changed) = simplify_pass(&call.arg, step_collector);
            changed |= arg_changed;
            Expr::Call(Call {
                coefficient: call.coefficient,
                func: call.func,
                arg: Box::new(arg),
            })
        },
        Expr::Binary(binary) => {
            let (lhs, lhs_changed) = simplify_pass(&binary.lhs, step_collector);
            let (rhs, rhs_changed) = simplify_pass(&binary.rhs, step_collector);
            changed |= lhs_changed || rhs_changed;
            Expr::Binary(Binary::new(lhs, binary.op, rhs))
        },
    };

    // then rewrite this node until no rule applies
    while let Some(new_expr) = rules::all(&expr, step_collector) {
        expr = new_expr;
        changed = true;
    }

    (expr, changed)
}

/// Base implementation of the simplification algorithm.
fn inner_simplify(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let mut passes = 1;
    let (mut expr, mut changed) = simplify_pass(expr, step_collector);
    while changed {
        (expr, changed) = simplify_pass(&expr, step_collector);
        passes += 1;
    }
    debug!(passes, "simplified expression");
    expr
}

/// Simplify the given expression.
pub fn simplify(expr: &Expr) -> Expr {
    inner_simplify(expr, &mut ())
}

/// Simplify the given expression. The steps taken by the simplifier will also be collected and
/// returned, in the order they were applied. This is useful for debugging, and also for
/// displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = inner_simplify(expr, &mut steps);
    (expr, steps)
}
