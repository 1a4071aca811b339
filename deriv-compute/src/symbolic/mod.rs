//! Symbolic manipulation of expressions.
//!
//! # Differentiation
//!
//! [`derivative()`] differentiates an [`Expr`] with respect to a single-letter variable. The
//! result is a new tree built directly from the calculus rules, with no simplification applied,
//! so its shape is predictable and stable across releases.
//!
//! One other letter may appear in the expression. It is treated as an implicit function of the
//! differentiation variable, and its derivative is written as a Leibniz term such as `dy/dx`.
//!
//! ```
//! use deriv_compute::symbolic::derivative;
//! use deriv_parser::parser::parse;
//!
//! let expr = parse("x * x").unwrap();
//! assert_eq!(derivative(&expr, 'x').to_string(), "(1 * x) + (x * 1)");
//!
//! let expr = parse("sin(y)").unwrap();
//! assert_eq!(derivative(&expr, 'x').to_string(), "dy/dx * cos(y)");
//! ```
//!
//! # Simplification
//!
//! Raw derivatives contain many trivial subexpressions, such as `1 * x` or `x * 0`. The
//! [`simplify()`] function removes these by repeatedly applying a fixed set of local rewrite
//! rules until none apply. It is a best-effort reduction: it never changes the value of the
//! expression, but it does not try to find a canonical form.
//!
//! ```
//! use deriv_compute::symbolic::{derivative, simplify};
//! use deriv_parser::parser::parse;
//!
//! let expr = parse("x * x").unwrap();
//! assert_eq!(simplify(&derivative(&expr, 'x')).to_string(), "2x");
//! ```
//!
//! [`Expr`]: deriv_parser::parser::ast::Expr

pub mod derivative;
pub mod simplify;
pub mod step_collector;

pub use derivative::derivative;
pub use simplify::{simplify, simplify_with_steps};
pub use step_collector::StepCollector;
