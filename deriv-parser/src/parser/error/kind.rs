use ariadne::{Fmt, Report};
use deriv_error::{standard_report, ErrorKind, EXPR};
use std::ops::Range;

/// There is an unclosed parenthesis, or a closing parenthesis with no matching opening
/// parenthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

impl ErrorKind for UnclosedParenthesis {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        let (label, help) = if self.opening {
            ("this parenthesis is not closed", "add a closing parenthesis `)` somewhere after this")
        } else {
            ("this parenthesis was never opened", "add an opening parenthesis `(` somewhere before this")
        };
        standard_report(
            src_id,
            spans,
            self.message(),
            &[label.to_string()],
            Some(help.to_string()),
        )
    }

    fn message(&self) -> String {
        "unclosed parenthesis".to_string()
    }
}

/// An operator or function did not have enough operands.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingOperand {
    /// The operator or function that is missing an operand, as written in the source.
    pub op: String,
}

impl ErrorKind for MissingOperand {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        standard_report(
            src_id,
            spans,
            self.message(),
            &[format!("I expected to see an {} next to this", "expression".fg(EXPR))],
            None,
        )
    }

    fn message(&self) -> String {
        format!("missing operand for `{}`", self.op)
    }
}

/// Two operands appeared next to each other with no operator between them.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingOperator;

impl ErrorKind for MissingOperator {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        standard_report(
            src_id,
            spans,
            self.message(),
            &["this operand is not joined to the rest of the expression".to_string()],
            Some(format!("write multiplication explicitly, e.g. `{}`", "2 * x".fg(EXPR))),
        )
    }

    fn message(&self) -> String {
        "missing operator between operands".to_string()
    }
}

/// A name that is not a registered function, a constant, or a single-letter variable.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownSymbol {
    /// The name that was found.
    pub name: String,
}

impl ErrorKind for UnknownSymbol {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        standard_report(
            src_id,
            spans,
            self.message(),
            &["this name is not recognized".to_string()],
            Some(format!(
                "variables are single letters, optionally with a coefficient such as `{}`; functions must be followed by `(`",
                "2x".fg(EXPR),
            )),
        )
    }

    fn message(&self) -> String {
        format!("unknown symbol `{}`", self.name)
    }
}

/// A character that has no meaning in an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedToken {
    /// The text that was found.
    pub found: String,
}

impl ErrorKind for UnexpectedToken {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        standard_report(
            src_id,
            spans,
            self.message(),
            &["here".to_string()],
            Some("the supported operators are `+ - * / ^`".to_string()),
        )
    }

    fn message(&self) -> String {
        format!("unexpected token `{}`", self.found)
    }
}

/// A number is too large to be represented.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberOutOfRange {
    /// The token containing the number, as written in the source.
    pub number: String,
}

impl ErrorKind for NumberOutOfRange {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        standard_report(
            src_id,
            spans,
            self.message(),
            &["this number is too large".to_string()],
            Some(format!("numbers must be smaller than {:e}", f64::MAX)),
        )
    }

    fn message(&self) -> String {
        format!("number out of range in `{}`", self.number)
    }
}

/// The input contained no tokens at all.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyExpression;

impl ErrorKind for EmptyExpression {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        standard_report(
            src_id,
            spans,
            self.message(),
            &[format!("you might need to add an {} here", "expression".fg(EXPR))],
            None,
        )
    }

    fn message(&self) -> String {
        "empty expression".to_string()
    }
}
