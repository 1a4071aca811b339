use crate::parser::op::BinOpKind;
use super::expr::Expr;

/// A binary expression, such as `1 + 2`. Binary expressions always have exactly two operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOpKind,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,
}

impl Binary {
    /// Creates a new binary expression.
    pub fn new(lhs: Expr, op: BinOpKind, rhs: Expr) -> Self {
        Self {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }
}
