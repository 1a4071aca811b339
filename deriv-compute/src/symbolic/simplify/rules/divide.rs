//! Simplification rules for quotients.

use crate::symbolic::{
    simplify::{rules::{do_binary, is_number, number, record}, step::Step},
    step_collector::StepCollector,
};
use deriv_parser::parser::{ast::Expr, op::BinOpKind};

/// `a/1 = a`
pub fn divide_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, rhs| {
        is_number(rhs, 1.0).then(|| lhs.clone())
    })?;

    record(step_collector, Step::DivideOne);
    Some(opt)
}

/// `0/a = 0`
///
/// `0/0` is left alone.
pub fn divide_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, rhs| {
        (is_number(lhs, 0.0) && !is_number(rhs, 0.0)).then(|| number(0.0))
    })?;

    record(step_collector, Step::DivideZero);
    Some(opt)
}

/// `6a/3a = 2`
/// `6a/3 = 2a`
pub fn reduce_fraction(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, rhs| {
        let (numerator, name) = lhs.as_symbol()?;
        let (denominator, rhs_name) = match rhs.as_symbol() {
            Some((denominator, rhs_name)) => (denominator, Some(rhs_name)),
            None => (rhs.as_number()?, None),
        };

        let ratio = numerator / denominator;
        if denominator == 0.0 || !ratio.is_finite() {
            return None;
        }

        match rhs_name {
            Some(rhs_name) if rhs_name == name => Some(number(ratio)),
            Some(_) => None,
            None => Some(Expr::coefficient_symbol(ratio, name)),
        }
    })?;

    record(step_collector, Step::ReduceFraction);
    Some(opt)
}

/// Applies all quotient rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    divide_one(expr, step_collector)
        .or_else(|| divide_zero(expr, step_collector))
        .or_else(|| reduce_fraction(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use deriv_parser::parser::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn apply(input: &str) -> Option<String> {
        all(&parse(input).unwrap(), &mut ()).map(|expr| expr.to_string())
    }

    #[test]
    fn one_and_zero() {
        assert_eq!(apply("sin(x) / 1"), Some("sin(x)".to_string()));
        assert_eq!(apply("0 / x"), Some("0".to_string()));
        assert_eq!(apply("0 / 0"), None);
        assert_eq!(apply("1 / x"), None);
    }

    #[test]
    fn same_variable() {
        assert_eq!(apply("6x / 3x"), Some("2".to_string()));
        assert_eq!(apply("x / x"), Some("1".to_string()));
        assert_eq!(apply("x / 2x"), Some("0.5".to_string()));
        assert_eq!(apply("x / y"), None);
    }

    #[test]
    fn variable_over_number() {
        assert_eq!(apply("6x / 3"), Some("2x".to_string()));
        assert_eq!(apply("x / 4"), Some("0.25x".to_string()));
        assert_eq!(apply("x / 0"), None);
        assert_eq!(apply("2 / x"), None);
    }
}
