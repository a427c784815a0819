//! Pairwise Pearson correlation over numeric columns

use log::debug;
use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;

use super::classify::{lookup_column, numeric_columns};
use super::error::{ExploreError, ExploreResult};

/// Square, symmetric matrix of Pearson coefficients between numeric columns.
///
/// A coefficient is NaN when it is undefined: a column with zero variance, or
/// fewer than two rows where both values are present.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    columns: Vec<String>,
    values: Vec<Vec<f64>>,
}

/// One off-diagonal entry of a [`CorrelationMatrix`].
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelatedPair {
    pub feature1: String,
    pub feature2: String,
    pub correlation: f64,
}

impl CorrelationMatrix {
    /// Column labels, in dataset order. Rows and columns share this order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Coefficient between two named columns, `None` if either is not in the
    /// matrix.
    pub fn get(&self, x: &str, y: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == x)?;
        let j = self.columns.iter().position(|c| c == y)?;
        Some(self.values[i][j])
    }

    /// Off-diagonal pairs sorted by descending absolute correlation. Undefined
    /// coefficients are left out.
    pub fn strongest_pairs(&self) -> Vec<CorrelatedPair> {
        let n = self.columns.len();
        let mut pairs: Vec<CorrelatedPair> = (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .filter(|(i, j)| !self.values[*i][*j].is_nan())
            .map(|(i, j)| CorrelatedPair {
                feature1: self.columns[i].clone(),
                feature2: self.columns[j].clone(),
                correlation: self.values[i][j],
            })
            .collect();

        pairs.sort_by(|a, b| {
            b.correlation
                .abs()
                .partial_cmp(&a.correlation.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        pairs
    }
}

/// Correlation matrix over every numeric column of `df`.
///
/// Uses the rows present in `df`, so correlating a filtered dataset gives the
/// filtered relationships. Each pair uses pairwise-complete observations:
/// a row is skipped for a pair only when one of its two values is missing.
///
/// Fails with [`ExploreError::InsufficientColumns`] when `df` has fewer than
/// two numeric columns.
pub fn correlation_matrix(df: &DataFrame) -> ExploreResult<CorrelationMatrix> {
    let columns = numeric_columns(df);
    let n = columns.len();

    if n < 2 {
        return Err(ExploreError::InsufficientColumns {
            operation: "correlation matrix",
            required: 2,
            found: n,
        });
    }

    let data: Vec<Vec<Option<f64>>> = columns
        .iter()
        .map(|name| float_values(lookup_column(df, name)?))
        .collect::<ExploreResult<_>>()?;

    // Upper triangle, mirrored afterwards
    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect();

    let coefficients: Vec<f64> = pairs
        .par_iter()
        .map(|(i, j)| pearson_pairwise_complete(&data[*i], &data[*j]).unwrap_or(f64::NAN))
        .collect();

    let mut values = vec![vec![f64::NAN; n]; n];
    for (i, column) in data.iter().enumerate() {
        values[i][i] = if has_variance(column) { 1.0 } else { f64::NAN };
    }
    for ((i, j), r) in pairs.into_iter().zip(coefficients) {
        values[i][j] = r;
        values[j][i] = r;
    }

    debug!(
        "correlation matrix over {} columns and {} rows",
        n,
        df.height()
    );

    Ok(CorrelationMatrix { columns, values })
}

/// Column values as `f64`, with nulls and NaN both mapped to `None`.
pub(crate) fn float_values(col: &Column) -> ExploreResult<Vec<Option<f64>>> {
    let floats = col.cast(&DataType::Float64)?;
    Ok(floats
        .f64()?
        .iter()
        .map(|v| v.filter(|v| !v.is_nan()))
        .collect())
}

fn has_variance(values: &[Option<f64>]) -> bool {
    let mut present = values.iter().flatten();
    match present.next() {
        Some(first) => present.any(|v| v != first),
        None => false,
    }
}

/// Pearson correlation over the rows where both values are present, using
/// Welford's single-pass update for numerical stability.
///
/// Returns `None` when fewer than two complete rows exist or either side has
/// zero variance.
fn pearson_pairwise_complete(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let mut n = 0.0;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;

    for (x, y) in xs.iter().zip(ys.iter()) {
        if let (Some(x), Some(y)) = (x, y) {
            n += 1.0;
            let dx = x - mean_x;
            let dy = y - mean_y;
            mean_x += dx / n;
            mean_y += dy / n;
            var_x += dx * (x - mean_x);
            var_y += dy * (y - mean_y);
            cov_xy += dx * (y - mean_y);
        }
    }

    if n < 2.0 || var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some((cov_xy / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}
