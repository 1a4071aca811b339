mod common;

use common::eval;
use deriv_compute::symbolic::{derivative, simplify};
use deriv_parser::parser::{
    ast::{Constant, Expr, Func},
    op::BinOpKind,
    parse,
};
use proptest::prelude::*;

/// Strategy for generating arbitrary leaves.
fn arb_leaf() -> impl Strategy<Value = Expr> {
    let letters = prop::sample::select(vec!['x', 'y']);
    prop_oneof![
        (-3i32..10).prop_map(|n| Expr::number(n as f64)),
        Just(Expr::number(0.5)),
        letters.clone().prop_map(Expr::symbol),
        (-3i32..4, letters).prop_map(|(c, name)| Expr::coefficient_symbol(c as f64, name)),
        Just(Expr::constant(Constant::Pi)),
        Just(Expr::leibniz('y', 'x')),
    ]
}

/// Strategy for generating arbitrary expression trees.
fn arb_expr() -> impl Strategy<Value = Expr> {
    let ops = vec![BinOpKind::Add, BinOpKind::Sub, BinOpKind::Mul, BinOpKind::Div, BinOpKind::Exp];
    arb_leaf().prop_recursive(5, 48, 2, move |inner| {
        prop_oneof![
            3 => (inner.clone(), prop::sample::select(ops.clone()), inner.clone())
                .prop_map(|(lhs, op, rhs)| Expr::binary(lhs, op, rhs)),
            1 => (prop::sample::select(Func::SIMPLE.to_vec()), inner)
                .prop_map(|(func, arg)| Expr::call(func, arg)),
        ]
    })
}

/// Strategy for generating trees that no rule can collapse to a constant: numbers are at least
/// 2, coefficients are positive, and only `+`, `*` and `^` are used.
fn arb_non_vanishing_expr() -> impl Strategy<Value = Expr> {
    let letters = prop::sample::select(vec!['x', 'y']);
    let leaf = prop_oneof![
        (2u32..20).prop_map(|n| Expr::number(n as f64)),
        letters.clone().prop_map(Expr::symbol),
        (1u32..6, letters).prop_map(|(c, name)| Expr::coefficient_symbol(c as f64, name)),
    ];
    let ops = vec![BinOpKind::Add, BinOpKind::Mul, BinOpKind::Exp];
    leaf.prop_recursive(4, 32, 2, move |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(ops.clone()), inner.clone())
                .prop_map(|(lhs, op, rhs)| Expr::binary(lhs, op, rhs)),
            (prop::sample::select(vec![Func::Sin, Func::Ln, Func::Arctan]), inner)
                .prop_map(|(func, arg)| Expr::call(func, arg)),
        ]
    })
}

/// Strategy for generating trees of the single variable `x` that can be evaluated numerically.
///
/// Numbers are small integers so that sums and products at `x = 0.5` are exact, and any
/// difference between the tree and its simplified form comes from the rewrite itself.
fn arb_single_variable_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        (-2i32..4).prop_map(|n| Expr::number(n as f64)),
        Just(Expr::symbol('x')),
        (-2i32..4).prop_map(|c| Expr::coefficient_symbol(c as f64, 'x')),
        Just(Expr::constant(Constant::Pi)),
        Just(Expr::constant(Constant::E)),
    ];
    let ops = vec![BinOpKind::Add, BinOpKind::Sub, BinOpKind::Mul, BinOpKind::Div, BinOpKind::Exp];
    leaf.prop_recursive(4, 32, 2, move |inner| {
        prop_oneof![
            3 => (inner.clone(), prop::sample::select(ops.clone()), inner.clone())
                .prop_map(|(lhs, op, rhs)| Expr::binary(lhs, op, rhs)),
            1 => (prop::sample::select(vec![Func::Sin, Func::Ln, Func::Abs]), inner)
                .prop_map(|(func, arg)| Expr::call(func, arg)),
        ]
    })
}

/// Returns true if the two values agree up to rounding.
fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/// Returns the sorted variables of the expression.
fn variables(expr: &Expr) -> Vec<char> {
    let mut symbols = expr.symbols();
    symbols.sort_unstable();
    symbols
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn idempotent(expr in arb_expr()) {
        let once = simplify(&expr);
        let twice = simplify(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn idempotent_on_derivatives(expr in arb_expr()) {
        let once = simplify(&derivative(&expr, 'x'));
        prop_assert_eq!(simplify(&once), once);
    }

    #[test]
    fn never_introduces_variables(expr in arb_expr()) {
        let before = variables(&expr);
        let after = variables(&simplify(&expr));
        prop_assert!(after.iter().all(|name| before.contains(name)));
    }

    #[test]
    fn keeps_variables_when_folding(expr in arb_non_vanishing_expr()) {
        prop_assert_eq!(variables(&simplify(&expr)), variables(&expr));
    }

    #[test]
    fn preserves_value(expr in arb_single_variable_expr()) {
        // rewrites such as `0 * a = 0` may remove an undefined point, but never change a value
        let before = eval(&expr, 0.5);
        if before.is_finite() {
            let simplified = simplify(&expr);
            let after = eval(&simplified, 0.5);
            prop_assert!(close(before, after), "{} = {} but {} = {}", expr, before, simplified, after);
        }
    }

    #[test]
    fn never_grows_much(expr in arb_expr()) {
        // the only growing rule turns `ax * bx` (3 nodes) into `ab * (x ^ 2)` (5 nodes)
        let simplified = simplify(&expr);
        prop_assert!(simplified.node_count() <= expr.node_count() * 2);
    }

    #[test]
    fn output_reparses(expr in arb_expr()) {
        let simplified = simplify(&expr);
        prop_assert_eq!(parse(&simplified.to_string()).unwrap(), simplified);
    }
}
