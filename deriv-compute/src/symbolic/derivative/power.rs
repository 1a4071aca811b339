//! Derivatives of powers, `u ^ v`.

use deriv_parser::parser::ast::{Constant, Expr, Func};
use super::Ctxt;
use tracing::trace;

/// Differentiates `base ^ exponent`.
///
/// - Neither side depends on a variable: `0`.
/// - Only the base depends on a variable (power rule): `(v * u) ^ (v - 1)`, multiplied on the
///   left by `u'` unless `u` is exactly the differentiation variable.
/// - The exponent depends on a variable (exponential rule): `u ^ v` is rewritten as
///   `e ^ (v * ln(u))`, and the chain rule is applied to the rewritten exponent.
pub(super) fn power(ctxt: &Ctxt, base: &Expr, exponent: &Expr) -> Expr {
    match (ctxt.depends(base), ctxt.depends(exponent)) {
        (false, false) => Expr::number(0.0),
        (true, false) => power_rule(ctxt, base, exponent),
        (_, true) => exponential_rule(ctxt, base, exponent),
    }
}

/// `(u ^ n)' = u' * ((n * u) ^ (n - 1))`
fn power_rule(ctxt: &Ctxt, base: &Expr, exponent: &Expr) -> Expr {
    trace!("power rule");
    let outer = (exponent.clone() * base.clone()).pow(exponent.clone() - Expr::number(1.0));
    if base.is_bare_symbol(ctxt.with) {
        outer
    } else {
        ctxt.derive(base) * outer
    }
}

/// `(u ^ v)' = (e ^ (v * ln(u))) * (v * ln(u))'`
fn exponential_rule(ctxt: &Ctxt, base: &Expr, exponent: &Expr) -> Expr {
    trace!("exponential rule");
    let rewritten = exponent.clone() * Expr::call(Func::Ln, base.clone());
    let derivative = ctxt.derive(&rewritten);
    Expr::constant(Constant::E).pow(rewritten) * derivative
}
