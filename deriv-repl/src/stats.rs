//! Measures how much the simplifier shortens derivatives.

use deriv_parser::parser::ast::Expr;
use std::fmt;

/// Running totals over a batch of derivatives, before and after simplification.
///
/// Two sizes are tracked for every derivative: the number of nodes in its tree, and the length of
/// its rendered text. Lines that could not be differentiated are only counted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    /// Number of derivatives recorded.
    pub count: usize,

    /// Number of inputs that failed to parse or validate.
    pub failures: usize,

    raw_nodes: usize,
    simplified_nodes: usize,
    raw_len: usize,
    simplified_len: usize,
}

/// Arithmetic mean of `total` over `count` items, or zero when there are none.
fn mean(total: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

/// Percentage by which `after` is smaller than `before`.
fn reduction(before: f64, after: f64) -> f64 {
    if before == 0.0 {
        0.0
    } else {
        100.0 * (1.0 - after / before)
    }
}

impl Stats {
    /// Creates an empty set of statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a derivative and its simplified form.
    pub fn record(&mut self, raw: &Expr, simplified: &Expr) {
        self.count += 1;
        self.raw_nodes += raw.node_count();
        self.simplified_nodes += simplified.node_count();
        self.raw_len += raw.to_string().chars().count();
        self.simplified_len += simplified.to_string().chars().count();
    }

    /// Records an input that could not be differentiated.
    pub fn record_failure(&mut self) {
        self.failures += 1;
    }

    /// Mean number of nodes in a raw derivative.
    pub fn mean_raw_nodes(&self) -> f64 {
        mean(self.raw_nodes, self.count)
    }

    /// Mean number of nodes in a simplified derivative.
    pub fn mean_simplified_nodes(&self) -> f64 {
        mean(self.simplified_nodes, self.count)
    }

    /// Mean length of a rendered raw derivative, in characters.
    pub fn mean_raw_len(&self) -> f64 {
        mean(self.raw_len, self.count)
    }

    /// Mean length of a rendered simplified derivative, in characters.
    pub fn mean_simplified_len(&self) -> f64 {
        mean(self.simplified_len, self.count)
    }

    /// Percentage by which simplification reduced the mean node count.
    pub fn node_reduction(&self) -> f64 {
        reduction(self.mean_raw_nodes(), self.mean_simplified_nodes())
    }

    /// Percentage by which simplification reduced the mean rendered length.
    pub fn length_reduction(&self) -> f64 {
        reduction(self.mean_raw_len(), self.mean_simplified_len())
    }

    /// The larger of the two reductions, rounded to the nearest whole percent.
    pub fn larger_reduction(&self) -> i64 {
        self.length_reduction().max(self.node_reduction()).round() as i64
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "-----------------------------------------------------";

        writeln!(f, "expressions: {} ({} failed)", self.count, self.failures)?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "raw output avg length: {:.2} chars", self.mean_raw_len())?;
        writeln!(f, "simplified output avg length: {:.2} chars", self.mean_simplified_len())?;
        writeln!(f, "length reduced: {:.2}%", self.length_reduction())?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "raw output avg nodes: {:.2}", self.mean_raw_nodes())?;
        writeln!(f, "simplified output avg nodes: {:.2}", self.mean_simplified_nodes())?;
        writeln!(f, "nodes reduced: {:.2}%", self.node_reduction())?;
        writeln!(f, "{}", RULE)?;
        write!(f, "larger percentage: {}%", self.larger_reduction())
    }
}
