//! Command-line front end for the derivative calculator.
//!
//! The library half of this crate turns a line of user input into a [`Derivation`]: it strips the
//! optional `d<var>/d<with>` prefix, parses the expression, checks that it can be differentiated,
//! and runs both the differentiator and the simplifier. The `deriv` binary wraps this in an
//! interactive prompt, and the `deriv-stats` binary aggregates [`Stats`] over a file of
//! expressions.
//!
//! ```
//! use deriv_repl::{derive_line, Options};
//!
//! let derivation = derive_line("x * x", 'x').unwrap();
//! assert_eq!(derivation.raw.to_string(), "(1 * x) + (x * 1)");
//! assert_eq!(derivation.simplified.to_string(), "2x");
//!
//! let derivation = derive_line("dy/dt t ^ 2", 'x').unwrap();
//! assert_eq!(derivation.with, 't');
//! assert_eq!(derivation.render(&Options::default()), "d/dt t ^ 2 = (2 * t) ^ (2 - 1)\n           = 2t");
//! ```

pub mod error;
pub mod stats;

use deriv_compute::symbolic::{derivative, simplify::step::Step, simplify_with_steps};
use deriv_error::Error as SpannedError;
use deriv_parser::parser::{ast::Expr, parse};
use error::{Error, TooManyVariables};
use std::fmt::Write;
use tracing::debug;

pub use stats::Stats;

/// Options controlling how a [`Derivation`] is rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Only print the raw derivative, without simplifying it.
    pub raw: bool,

    /// Print the simplification steps after the simplified derivative.
    pub steps: bool,
}

/// Returns true if the letter can be used as a variable of differentiation.
///
/// `e` always denotes Euler's number, so it can never be differentiated against.
pub fn is_variable(name: char) -> bool {
    name.is_ascii_alphabetic() && name != 'e'
}

/// Parses a variable of differentiation given on the command line.
pub fn parse_var(arg: &str) -> Result<char, String> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(name), None) if is_variable(name) => Ok(name),
        _ => Err(format!("`{}` is not a single-letter variable (other than `e`)", arg)),
    }
}

/// Splits the optional `d<var>/d<with>` prefix from the start of the input.
///
/// Returns the variable of differentiation named by the prefix, if there is one, and the byte
/// offset at which the expression starts. The prefix must be followed by whitespace.
pub fn split_prefix(line: &str) -> (Option<char>, usize) {
    let trimmed = line.trim_start();
    let start = line.len() - trimmed.len();

    let mut chars = trimmed.chars();
    let prefix = (
        chars.next(),
        chars.next(),
        chars.next(),
        chars.next(),
        chars.next(),
        chars.next(),
    );
    match prefix {
        (Some('d'), Some(of), Some('/'), Some('d'), Some(with), Some(sep))
            if of.is_ascii_alphabetic() && is_variable(with) && sep.is_whitespace() => {
            (Some(with), start + 5 + sep.len_utf8())
        },
        _ => (None, start),
    }
}

/// Checks that the expression mentions no more than one variable besides `with`.
fn validate(expr: &Expr, with: char, span: std::ops::Range<usize>) -> Result<(), Error> {
    let found = expr.symbols();
    let others = found.iter().filter(|&&name| name != with).count();
    if others > 1 {
        return Err(Error::Validation(SpannedError::new(
            vec![span],
            TooManyVariables { with, found },
        )));
    }
    Ok(())
}

/// The result of differentiating one line of input.
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation {
    /// The variable of differentiation.
    pub with: char,

    /// The expression as it was written, without the prefix and surrounding whitespace.
    pub input: String,

    /// The parsed expression.
    pub expr: Expr,

    /// The derivative, exactly as produced by the differentiator.
    pub raw: Expr,

    /// The simplified derivative.
    pub simplified: Expr,

    /// The steps taken to simplify the raw derivative.
    pub steps: Vec<Step>,
}

impl Derivation {
    /// Renders the derivation as it is shown to the user.
    ///
    /// The first line is `d/d<with> <input> = <derivative>`. The simplified derivative follows on
    /// its own line, aligned under the `=`, unless [`Options::raw`] is set.
    pub fn render(&self, options: &Options) -> String {
        let head = format!("d/d{} {} ", self.with, self.input);
        let mut out = format!("{}= {}", head, self.raw);
        if options.raw {
            return out;
        }

        let pad = " ".repeat(head.chars().count());
        // writing into a `String` cannot fail
        let _ = write!(out, "\n{}= {}", pad, self.simplified);

        if options.steps {
            if self.steps.is_empty() {
                out.push_str("\nsteps: (none)");
            } else {
                out.push_str("\nsteps:");
                for step in &self.steps {
                    let _ = write!(out, "\n  {:?}", step);
                }
            }
        }
        out
    }
}

/// Parses, validates, and differentiates one line of input.
///
/// `default_with` is the variable of differentiation used when the line has no `d<var>/d<with>`
/// prefix. Spans in the returned error are relative to the whole line.
pub fn derive_line(line: &str, default_with: char) -> Result<Derivation, Error> {
    let (prefix, offset) = split_prefix(line);
    let with = prefix.unwrap_or(default_with);
    let source = &line[offset..];

    let expr = parse(source).map_err(|mut err| {
        for span in &mut err.spans {
            span.start += offset;
            span.end += offset;
        }
        Error::Parse(err)
    })?;
    validate(&expr, with, offset..line.trim_end().len().max(offset))?;

    let raw = derivative(&expr, with);
    let (simplified, steps) = simplify_with_steps(&raw);
    debug!(
        %with,
        raw_nodes = raw.node_count(),
        simplified_nodes = simplified.node_count(),
        "differentiated expression",
    );

    Ok(Derivation {
        with,
        input: source.trim().to_string(),
        expr,
        raw,
        simplified,
        steps,
    })
}
