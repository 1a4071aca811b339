//! Tokenizer and shunting-yard parser for infix mathematical expressions.
//!
//! The parser produces an [`Expr`](parser::ast::Expr) tree, which can be rendered back into a
//! canonical, fully parenthesized string with [`stringify`](parser::fmt::stringify) or its
//! [`Display`](std::fmt::Display) implementation.
//!
//! ```
//! use deriv_parser::parser::parse;
//!
//! let expr = parse("3.7 * log_10(8.2) - sin(pi / 3.5)").unwrap();
//! assert_eq!(expr.to_string(), "(3.7 * log_10(8.2)) - sin((pi / 3.5))");
//! ```

pub mod parser;
pub mod tokenizer;
