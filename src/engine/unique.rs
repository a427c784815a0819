//! Distinct-value listings for categorical inspection

use std::collections::HashSet;

use polars::prelude::*;

use super::classify::lookup_column;
use super::error::ExploreResult;
use super::numeral::is_numeral;

/// Text form of every cell in `col`, with `None` for missing values.
///
/// Floating-point NaN counts as missing.
pub(crate) fn text_values(col: &Column) -> ExploreResult<Vec<Option<String>>> {
    let text = col.cast(&DataType::String)?;
    let mut values: Vec<Option<String>> = text
        .str()?
        .iter()
        .map(|v| v.map(str::to_string))
        .collect();

    if col.dtype().is_float() {
        let floats = col.cast(&DataType::Float64)?;
        for (value, f) in values.iter_mut().zip(floats.f64()?.iter()) {
            if f.is_some_and(f64::is_nan) {
                *value = None;
            }
        }
    }

    Ok(values)
}

/// Distinct text values of `column` that do not look like plain numerals,
/// in first-occurrence order.
///
/// Works on columns of any kind: on numeric-looking data it surfaces stray
/// text entries such as `"n/a"` or `"unknown"`.
pub fn unique_non_numeric(df: &DataFrame, column: &str) -> ExploreResult<Vec<String>> {
    let col = lookup_column(df, column)?;
    Ok(first_occurrences(
        text_values(col)?
            .into_iter()
            .flatten()
            .filter(|v| !is_numeral(v)),
    ))
}

/// All distinct non-missing text values of `column`, in first-occurrence
/// order. These are the options offered by a categorical value filter.
pub fn distinct_values(df: &DataFrame, column: &str) -> ExploreResult<Vec<String>> {
    let col = lookup_column(df, column)?;
    Ok(first_occurrences(text_values(col)?.into_iter().flatten()))
}

fn first_occurrences(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(v.clone())).collect()
}
