use ariadne::{Fmt, Report};
use deriv_error::{standard_report, Error as SpannedError, ErrorKind, EXPR};
use std::{fmt, io, ops::Range};

/// The expression uses more variables than the differentiator can relate to each other.
///
/// Besides the variable of differentiation, at most one other letter may appear, which is then
/// treated as an implicit function of the first.
#[derive(Debug, Clone, PartialEq)]
pub struct TooManyVariables {
    /// The variable of differentiation.
    pub with: char,

    /// Every distinct variable found in the expression, in order of first appearance.
    pub found: Vec<char>,
}

impl ErrorKind for TooManyVariables {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        let found = self.found
            .iter()
            .map(|name| format!("`{}`", name.fg(EXPR)))
            .collect::<Vec<_>>()
            .join(", ");
        standard_report(
            src_id,
            spans,
            self.message(),
            &[format!("this expression uses {}", found)],
            Some(format!(
                "only `{}` and one other variable may appear in the same expression",
                self.with,
            )),
        )
    }

    fn message(&self) -> String {
        format!("too many variables ({} found)", self.found.len())
    }
}

/// Utility enum to package errors that can occur while processing a line of input.
#[derive(Debug)]
pub enum Error {
    /// The expression could not be parsed.
    Parse(SpannedError),

    /// The expression parsed, but cannot be differentiated as written.
    Validation(SpannedError),
}

impl Error {
    /// Returns the underlying spanned error.
    pub fn inner(&self) -> &SpannedError {
        match self {
            Self::Parse(err) | Self::Validation(err) => err,
        }
    }

    /// Report this error to stderr, highlighting the offending parts of the input.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.inner().report_to_stderr(src_id, input)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "parse error: {}", err),
            Self::Validation(err) => write!(f, "invalid expression: {}", err),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn message_counts_variables() {
        let kind = TooManyVariables { with: 'x', found: vec!['x', 'y', 'z'] };
        assert_eq!(kind.message(), "too many variables (3 found)");
    }

    #[test]
    fn display_names_the_stage() {
        let err = Error::Validation(SpannedError::new(
            vec![0..5],
            TooManyVariables { with: 'x', found: vec!['y', 'z'] },
        ));
        assert_eq!(err.to_string(), "invalid expression: too many variables (2 found)");
        assert_eq!(err.inner().spans, vec![0..5]);
    }
}
