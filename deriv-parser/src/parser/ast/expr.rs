//! The expression tree produced by the parser and consumed by the differentiator and simplifier.
//!
//! Every node is exactly one of three things:
//!
//! - an [`Expr::Binary`] operator with exactly two operands,
//! - an [`Expr::Call`] of a registered function with exactly one argument,
//! - an [`Expr::Leaf`] holding a number, constant, variable or Leibniz placeholder.
//!
//! The category of a node is decided once, when it is constructed. Trees are never mutated in
//! place by later stages; differentiation and simplification always build a new tree, cloning the
//! untouched subtrees they reuse.

use crate::parser::op::BinOpKind;
use super::{binary::Binary, call::{Call, Func}, leaf::{Constant, Leaf}};
use std::ops::{Add, BitXor, Div, Mul, Sub};

/// A node of the expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number, constant, variable or Leibniz placeholder.
    Leaf(Leaf),

    /// A function applied to one argument, such as `sin(x)`.
    Call(Call),

    /// A binary operator applied to two operands, such as `x + 1`.
    Binary(Binary),
}

impl Expr {
    /// Creates a number leaf.
    pub fn number(n: f64) -> Self {
        Self::Leaf(Leaf::Number(n))
    }

    /// Creates a constant leaf.
    pub fn constant(constant: Constant) -> Self {
        Self::Leaf(Leaf::Constant(constant))
    }

    /// Creates a bare variable leaf.
    pub fn symbol(name: char) -> Self {
        Self::Leaf(Leaf::Symbol { coefficient: None, name })
    }

    /// Creates a variable leaf with a numeric coefficient, such as `5x`.
    pub fn coefficient_symbol(coefficient: f64, name: char) -> Self {
        Self::Leaf(Leaf::Symbol { coefficient: Some(coefficient), name })
    }

    /// Creates the Leibniz placeholder `d<of>/d<with>`.
    pub fn leibniz(of: char, with: char) -> Self {
        Self::Leaf(Leaf::Derivative { of, with })
    }

    /// Creates a binary expression.
    pub fn binary(lhs: Expr, op: BinOpKind, rhs: Expr) -> Self {
        Self::Binary(Binary::new(lhs, op, rhs))
    }

    /// Creates a function call with no coefficient.
    pub fn call(func: Func, arg: Expr) -> Self {
        Self::Call(Call::new(func, arg))
    }

    /// Raises this expression to the given power.
    pub fn pow(self, exponent: Expr) -> Self {
        Self::binary(self, BinOpKind::Exp, exponent)
    }

    /// Returns true if this node is a binary operator.
    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Binary(_))
    }

    /// Returns true if this node is a function call.
    pub fn is_call(&self) -> bool {
        matches!(self, Self::Call(_))
    }

    /// Returns true if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns the leaf stored in this node, if it is one.
    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    /// Returns the number stored in this node, if it is a number leaf.
    pub fn as_number(&self) -> Option<f64> {
        self.as_leaf()?.as_number()
    }

    /// Returns true if this node is a number leaf, meaning it contains no letters at all.
    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }

    /// Returns the coefficient (`1` if omitted) and letter of this node, if it is a variable
    /// leaf.
    pub fn as_symbol(&self) -> Option<(f64, char)> {
        match self.as_leaf()? {
            Leaf::Symbol { coefficient, name } => Some((coefficient.unwrap_or(1.0), *name)),
            _ => None,
        }
    }

    /// Returns true if this node is exactly the given variable, with no coefficient.
    pub fn is_bare_symbol(&self, name: char) -> bool {
        matches!(self, Self::Leaf(Leaf::Symbol { coefficient: None, name: n }) if *n == name)
    }

    /// Returns an iterator that traverses the tree in left-to-right post-order.
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }

    /// Returns the number of nodes in the tree, including this one.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns true if the given variable appears anywhere in the tree.
    pub fn contains_symbol(&self, name: char) -> bool {
        self.post_order_iter()
            .any(|expr| matches!(expr, Self::Leaf(leaf) if leaf.variable() == Some(name)))
    }

    /// Returns true if any variable appears anywhere in the tree.
    pub fn has_symbols(&self) -> bool {
        self.post_order_iter()
            .any(|expr| matches!(expr, Self::Leaf(leaf) if leaf.variable().is_some()))
    }

    /// Returns the distinct variables in the tree, in order of first appearance from the left.
    pub fn symbols(&self) -> Vec<char> {
        let mut symbols = Vec::new();
        for expr in self.post_order_iter() {
            if let Some(name) = expr.as_leaf().and_then(Leaf::variable) {
                if !symbols.contains(&name) {
                    symbols.push(name);
                }
            }
        }
        symbols
    }
}

impl From<Leaf> for Expr {
    fn from(leaf: Leaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<Call> for Expr {
    fn from(call: Call) -> Self {
        Self::Call(call)
    }
}

impl From<Binary> for Expr {
    fn from(binary: Binary) -> Self {
        Self::Binary(binary)
    }
}

/// Adds two [`Expr`]s together. No simplification is done.
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::binary(self, BinOpKind::Add, rhs)
    }
}

/// Subtracts two [`Expr`]s. No simplification is done.
impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::binary(self, BinOpKind::Sub, rhs)
    }
}

/// Multiplies two [`Expr`]s together. No simplification is done.
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::binary(self, BinOpKind::Mul, rhs)
    }
}

/// Divides two [`Expr`]s. No simplification is done.
impl Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::binary(self, BinOpKind::Div, rhs)
    }
}

/// Raises an [`Expr`] to the power of another, written `lhs ^ rhs`. No simplification is done.
impl BitXor for Expr {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.pow(rhs)
    }
}

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current expression in the stack and marks it as the last visited expression.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given expression matches the last visited expression.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, expr),
            None => false,
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            match expr {
                Expr::Leaf(_) => return self.visit(),
                Expr::Call(call) => {
                    if self.is_last_visited(&call.arg) {
                        return self.visit();
                    }
                    self.stack.push(&call.arg);
                },
                Expr::Binary(binary) => {
                    if self.is_last_visited(&binary.rhs) {
                        return self.visit();
                    }
                    self.stack.push(&binary.rhs);
                    self.stack.push(&binary.lhs);
                },
            }
        }
    }
}
