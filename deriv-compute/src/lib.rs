//! Symbolic differentiation and simplification of the expression trees produced by
//! [`deriv_parser`].

pub mod symbolic;
