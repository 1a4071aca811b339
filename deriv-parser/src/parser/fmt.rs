//! Canonical infix rendering of expression trees.
//!
//! The rendering is fully parenthesized: every binary operator below the top level is wrapped in
//! parentheses, while leaves and function calls never are. Function arguments are rendered as if
//! they were below the top level, so `sin(x + 1)` renders as `sin((x + 1))`. The output always
//! parses back into an equal tree.

use std::fmt::{self, Display, Formatter};
use super::ast::{call::Call, expr::Expr, leaf::Leaf};

/// Renders the expression in canonical infix form.
///
/// `top` should be `true` for the root of the tree; it controls whether an operator at the root is
/// wrapped in parentheses.
pub fn stringify(expr: &Expr, top: bool) -> String {
    let mut out = String::new();
    // writing to a `String` cannot fail
    let _ = write_expr(&mut out, expr, top);
    out
}

fn write_expr(out: &mut impl fmt::Write, expr: &Expr, top: bool) -> fmt::Result {
    match expr {
        Expr::Leaf(leaf) => write!(out, "{}", leaf),
        Expr::Call(call) => write_call(out, call),
        Expr::Binary(binary) => {
            if !top {
                out.write_char('(')?;
            }
            write_expr(out, &binary.lhs, false)?;
            write!(out, " {} ", binary.op)?;
            write_expr(out, &binary.rhs, false)?;
            if !top {
                out.write_char(')')?;
            }
            Ok(())
        },
    }
}

fn write_call(out: &mut impl fmt::Write, call: &Call) -> fmt::Result {
    if let Some(coefficient) = call.coefficient {
        write!(out, "{}", Leaf::Number(coefficient))?;
    }
    write!(out, "{}(", call.func)?;
    write_expr(out, &call.arg, false)?;
    out.write_char(')')
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_expr(f, self, true)
    }
}

impl Display for Call {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_call(f, self)
    }
}
