//! Folding of operators whose operands are both numbers.

use crate::symbolic::{simplify::{rules::{number, record}, step::Step}, step_collector::StepCollector};
use deriv_parser::parser::ast::{Binary, Expr};

/// `2+3 = 5`, `2*3 = 6`, `2^3 = 8`, etc.
///
/// The fold is skipped if the result is not finite (`1/0`, `0/0`, `(-8)^0.5`), leaving the
/// expression as written.
pub fn fold_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Binary(Binary { lhs, op, rhs }) = expr else {
        return None;
    };
    let value = op.apply(lhs.as_number()?, rhs.as_number()?);
    if !value.is_finite() {
        return None;
    }

    record(step_collector, Step::FoldConstants);
    Some(number(value))
}

/// Applies all numeric rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold_constants(expr, step_collector)
}

#[cfg(test)]
mod tests {
    use deriv_parser::parser::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn fold(input: &str) -> Option<String> {
        fold_constants(&parse(input).unwrap(), &mut ()).map(|expr| expr.to_string())
    }

    #[test]
    fn folds_every_operator() {
        assert_eq!(fold("2 + 3"), Some("5".to_string()));
        assert_eq!(fold("5 - 1"), Some("4".to_string()));
        assert_eq!(fold("2 * 3.5"), Some("7".to_string()));
        assert_eq!(fold("1 / 4"), Some("0.25".to_string()));
        assert_eq!(fold("2 ^ 10"), Some("1024".to_string()));
    }

    #[test]
    fn negative_zero_is_normalized() {
        assert_eq!(fold_constants(&parse("0 * -1").unwrap(), &mut ()), Some(Expr::number(0.0)));
        assert_eq!(fold("0 * -1"), Some("0".to_string()));
    }

    #[test]
    fn skips_non_finite() {
        assert_eq!(fold("1 / 0"), None);
        assert_eq!(fold("0 / 0"), None);
        assert_eq!(fold("-8 ^ 0.5"), None);
    }

    #[test]
    fn skips_non_numbers() {
        assert_eq!(fold("x + 1"), None);
        assert_eq!(fold("pi * 2"), None);
        assert_eq!(fold("5"), None);
    }
}
