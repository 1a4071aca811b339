use deriv_parser::parser::{
    ast::{Call, Constant, Expr, Func, Leaf},
    fmt::stringify,
    op::BinOpKind,
    parse,
    parse_with_validity,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Parses the input and renders it back in canonical form.
fn round_trip(input: &str) -> String {
    stringify(&parse(input).unwrap(), true)
}

#[test]
fn canonical_form() {
    assert_eq!(
        round_trip("3.7 * log_10(8.2) - sin(pi / 3.5)"),
        "(3.7 * log_10(8.2)) - sin((pi / 3.5))",
    );
    assert_eq!(
        round_trip("(cos(2.5) + log_2(9.1 + 6.7 ^ 1.2)) * (5.3 + sin(0.75 * pi))"),
        "(cos(2.5) + log_2((9.1 + (6.7 ^ 1.2)))) * (5.3 + sin((0.75 * pi)))",
    );
}

#[test]
fn canonical_form_of_leaves() {
    assert_eq!(round_trip("x"), "x");
    assert_eq!(round_trip("  2x  "), "2x");
    assert_eq!(round_trip("(((e)))"), "e");
    assert_eq!(round_trip("dy/dx"), "dy/dx");
}

#[test]
fn canonical_form_of_compact_input() {
    assert_eq!(round_trip("x^2+3x-1"), "((x ^ 2) + 3x) - 1");
    assert_eq!(round_trip("sin(x)*cos(y)"), "sin(x) * cos(y)");
    assert_eq!(round_trip("x^y^2"), "x ^ (y ^ 2)");
}

#[test]
fn log_bases() {
    assert_eq!(
        parse("log_2(x)").unwrap(),
        Expr::Call(Call::new(Func::Log(Some(Leaf::Number(2.0))), Expr::symbol('x'))),
    );
    assert_eq!(
        parse("log_e(x)").unwrap(),
        Expr::call(Func::Log(Some(Leaf::Constant(Constant::E))), Expr::symbol('x')),
    );
    assert_eq!(parse("log(x)").unwrap(), Expr::call(Func::Log(None), Expr::symbol('x')));
}

#[test]
fn invalid_parentheses() {
    assert_eq!(parse_with_validity("(((3 + 2) + 1)"), (None, false));
    assert_eq!(parse_with_validity("(1 + (2 + 3)))"), (None, false));
    assert_eq!(parse_with_validity(")x("), (None, false));
}

#[test]
fn valid_parentheses() {
    let (expr, valid) = parse_with_validity("((3 + 2) + 1)");
    assert!(valid);
    assert_eq!(
        expr,
        Some((Expr::number(3.0) + Expr::number(2.0)) + Expr::number(1.0)),
    );
}

/// Strategy for generating leaves that render and re-parse unambiguously.
fn arb_leaf() -> impl Strategy<Value = Expr> {
    let letters = prop::sample::select(vec!['x', 'y', 't', 'a']);
    prop_oneof![
        (0u32..1000).prop_map(|n| Expr::number(n as f64)),
        (-100i32..0).prop_map(|n| Expr::number(n as f64)),
        (0u32..100, 1u32..100).prop_map(|(i, f)| Expr::number(i as f64 + f as f64 / 100.0)),
        letters.clone().prop_map(Expr::symbol),
        (-20i32..20, letters).prop_map(|(c, name)| Expr::coefficient_symbol(c as f64, name)),
        Just(Expr::constant(Constant::Pi)),
        Just(Expr::constant(Constant::E)),
        Just(Expr::leibniz('y', 'x')),
    ]
}

/// Strategy for generating whole expression trees with bounded depth.
fn arb_expr() -> impl Strategy<Value = Expr> {
    let ops = vec![BinOpKind::Add, BinOpKind::Sub, BinOpKind::Mul, BinOpKind::Div, BinOpKind::Exp];
    let mut funcs = Func::SIMPLE.to_vec();
    funcs.push(Func::Log(None));
    funcs.push(Func::Log(Some(Leaf::Number(2.0))));

    arb_leaf().prop_recursive(4, 32, 2, move |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(ops.clone()), inner.clone())
                .prop_map(|(lhs, op, rhs)| Expr::binary(lhs, op, rhs)),
            (prop::sample::select(funcs.clone()), inner)
                .prop_map(|(func, arg)| Expr::call(func, arg)),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn stringify_reparses_to_same_tree(expr in arb_expr()) {
        let text = stringify(&expr, true);
        let reparsed = parse(&text);
        prop_assert!(reparsed.is_ok(), "failed to parse `{}`", text);
        prop_assert_eq!(reparsed.unwrap(), expr);
    }

    #[test]
    fn parser_never_panics(input in "[ 0-9a-z_.+*/^()%-]{0,40}") {
        let (expr, valid) = parse_with_validity(&input);
        prop_assert_eq!(expr.is_some(), valid);
    }
}
