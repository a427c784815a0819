//! Distribution summaries behind the histogram, box and scatter views
//!
//! These compute the numbers a plot would draw; rendering happens in the
//! report layer.

use polars::prelude::*;

use super::classify::{lookup_column, ColumnKind};
use super::correlation::float_values;
use super::error::{ExploreError, ExploreResult};

/// Default bin count, matching the usual plotting default.
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

/// Equal-width histogram of a numeric column.
#[derive(Debug, Clone)]
pub struct Histogram {
    pub column: String,
    /// Bin boundaries, one more than `counts`. Every bin is half-open except
    /// the last, which includes its right edge.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Five-number summary with Tukey whiskers.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub column: String,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Smallest value within 1.5 IQR below `q1`.
    pub lower_whisker: f64,
    /// Largest value within 1.5 IQR above `q3`.
    pub upper_whisker: f64,
    /// Values beyond the whiskers, ascending.
    pub outliers: Vec<f64>,
}

/// Paired values of two numeric columns, rows with a missing side removed.
#[derive(Debug, Clone)]
pub struct ScatterPoints {
    pub x_column: String,
    pub y_column: String,
    pub points: Vec<(f64, f64)>,
}

fn numeric_values(
    df: &DataFrame,
    column: &str,
    operation: &'static str,
) -> ExploreResult<Vec<Option<f64>>> {
    let col = lookup_column(df, column)?;
    let kind = ColumnKind::of_dtype(col.dtype());
    if kind != ColumnKind::Numeric {
        return Err(ExploreError::TypeMismatch {
            column: column.to_string(),
            operation,
            expected: ColumnKind::Numeric,
            actual: kind,
        });
    }
    float_values(col)
}

/// Histogram of `column` with `bins` equal-width bins (at least one).
///
/// Infinite values are treated as missing. A constant column spans
/// `[v - 0.5, v + 0.5]`; a column with no values spans `[0, 1]` with all
/// counts zero.
pub fn histogram(df: &DataFrame, column: &str, bins: usize) -> ExploreResult<Histogram> {
    let bins = bins.max(1);
    let values: Vec<f64> = numeric_values(df, column, "histogram")?
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .collect();

    let (lo, hi) = match values.iter().copied().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
    }) {
        None => (0.0, 1.0),
        Some((lo, hi)) if lo == hi => (lo - 0.5, hi + 0.5),
        Some(range) => range,
    };

    // Work at half scale so spans wider than f64::MAX stay finite.
    let half_lo = lo / 2.0;
    let half_width = (hi / 2.0 - half_lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins)
        .map(|i| 2.0 * (half_lo + half_width * i as f64))
        .collect();

    let mut counts = vec![0usize; bins];
    for v in &values {
        let offset = (v / 2.0 - half_lo) / half_width;
        let idx = if offset.is_finite() {
            (offset as usize).min(bins - 1)
        } else {
            0
        };
        counts[idx] += 1;
    }

    Ok(Histogram {
        column: column.to_string(),
        edges,
        counts,
    })
}

/// Quantile of sorted data by linear interpolation between closest ranks.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    sorted[lower] + (sorted[upper] - sorted[lower]) * (pos - lower as f64)
}

/// Box-plot summary of `column`, or `None` when it has no values.
pub fn box_summary(df: &DataFrame, column: &str) -> ExploreResult<Option<BoxSummary>> {
    let mut values: Vec<f64> = numeric_values(df, column, "box plot")?
        .into_iter()
        .flatten()
        .collect();

    if values.is_empty() {
        return Ok(None);
    }
    values.sort_by(|a, b| a.total_cmp(b));

    let q1 = quantile(&values, 0.25);
    let median = quantile(&values, 0.5);
    let q3 = quantile(&values, 0.75);
    let iqr = q3 - q1;
    let low_fence = q1 - 1.5 * iqr;
    let high_fence = q3 + 1.5 * iqr;

    let mut lower_whisker = f64::INFINITY;
    let mut upper_whisker = f64::NEG_INFINITY;
    for &v in values.iter().filter(|v| **v >= low_fence && **v <= high_fence) {
        lower_whisker = lower_whisker.min(v);
        upper_whisker = upper_whisker.max(v);
    }
    if lower_whisker > q1 {
        lower_whisker = q1;
    }
    if upper_whisker < q3 {
        upper_whisker = q3;
    }

    let outliers = values
        .iter()
        .copied()
        .filter(|v| *v < low_fence || *v > high_fence)
        .collect();

    Ok(Some(BoxSummary {
        column: column.to_string(),
        count: values.len(),
        min: values[0],
        q1,
        median,
        q3,
        max: values[values.len() - 1],
        lower_whisker,
        upper_whisker,
        outliers,
    }))
}

/// Points for a scatter plot of exactly two numeric columns.
pub fn scatter_points(df: &DataFrame, columns: &[String]) -> ExploreResult<ScatterPoints> {
    let [x_column, y_column] = columns else {
        return Err(ExploreError::WrongColumnCount {
            operation: "scatter plot",
            expected: 2,
            found: columns.len(),
        });
    };

    let xs = numeric_values(df, x_column, "scatter plot")?;
    let ys = numeric_values(df, y_column, "scatter plot")?;

    let points = xs
        .into_iter()
        .zip(ys)
        .filter_map(|(x, y)| Some((x?, y?)))
        .collect();

    Ok(ScatterPoints {
        x_column: x_column.clone(),
        y_column: y_column.clone(),
        points,
    })
}
