//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, along with the spanned [`Error`] type that carries an [`ErrorKind`] around.

use ariadne::{Color, Label, Report, ReportKind, Source};
use std::{fmt::Debug, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;

    /// A short, single-line description of the error, used where a full report cannot be
    /// displayed (logs, batch summaries).
    fn message(&self) -> String;
}

/// Builds the standard report shape shared by most error kinds: a headline message, one label per
/// span (paired in order with `labels`), and optional help text.
///
/// Labels with an empty message are still drawn, but without any text attached.
pub fn standard_report<'a>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: impl ToString,
    labels: &[String],
    help: Option<String>,
) -> Report<'a, (&'a str, Range<usize>)> {
    let offset = spans.first().map_or(0, |span| span.start);
    let labels = spans
        .iter()
        .cloned()
        .zip(labels.iter().map(String::as_str).chain(std::iter::repeat("")))
        .map(|(span, text)| {
            let label = Label::new((src_id, span)).with_color(EXPR);
            if text.is_empty() {
                label
            } else {
                label.with_message(text)
            }
        })
        .collect::<Vec<_>>();

    let mut builder = Report::build(ReportKind::Error, src_id, offset)
        .with_message(message)
        .with_labels(labels);
    if let Some(help) = help {
        builder.set_help(help);
    }
    builder.finish()
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr, highlighting the spans in the given input.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}
