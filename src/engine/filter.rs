//! Predicate application
//!
//! Filtering is stateless: every call takes the full predicate set and
//! recomputes the view from the dataset it is given.

use log::debug;
use polars::prelude::*;

use super::classify::{lookup_column, ColumnKind};
use super::error::{ExploreError, ExploreResult};
use super::predicate::Predicate;
use super::unique::text_values;

/// Check that `predicate` can be applied to `df`.
///
/// Fails with [`ExploreError::UnknownColumn`] when the column is absent,
/// [`ExploreError::TypeMismatch`] when the predicate does not fit the column's
/// kind, and [`ExploreError::InvalidRange`] when a range is inverted.
pub fn validate_predicate(df: &DataFrame, predicate: &Predicate) -> ExploreResult<()> {
    let col = lookup_column(df, predicate.column())?;
    let actual = ColumnKind::of_dtype(col.dtype());
    let expected = predicate.required_kind();

    if actual != expected {
        return Err(ExploreError::TypeMismatch {
            column: predicate.column().to_string(),
            operation: predicate.operation(),
            expected,
            actual,
        });
    }

    if let Predicate::RangeWithin { column, low, high } = predicate {
        if low.is_nan() || high.is_nan() || low > high {
            return Err(ExploreError::InvalidRange {
                column: column.clone(),
                low: *low,
                high: *high,
            });
        }
    }

    Ok(())
}

/// Restrict `df` to the rows satisfying every predicate.
///
/// All predicates are validated up front, in order, so the first invalid one
/// is reported and no filtering happens. An empty slice returns the dataset
/// unchanged. Missing values never satisfy a predicate.
pub fn apply_filters<'a, I>(df: &DataFrame, predicates: I) -> ExploreResult<DataFrame>
where
    I: IntoIterator<Item = &'a Predicate>,
{
    let predicates: Vec<&Predicate> = predicates.into_iter().collect();

    for predicate in &predicates {
        validate_predicate(df, predicate)?;
    }

    if predicates.is_empty() {
        return Ok(df.clone());
    }

    let mut keep = vec![true; df.height()];
    for predicate in &predicates {
        let matches = predicate_mask(df, predicate)?;
        for (k, m) in keep.iter_mut().zip(matches) {
            *k &= m;
        }
        debug!(
            "after {}: {} of {} rows remain",
            predicate,
            keep.iter().filter(|k| **k).count(),
            df.height()
        );
    }

    let mask = BooleanChunked::from_slice("mask".into(), &keep);
    Ok(df.filter(&mask)?)
}

/// Per-row result of a single, already validated predicate.
fn predicate_mask(df: &DataFrame, predicate: &Predicate) -> ExploreResult<Vec<bool>> {
    let col = lookup_column(df, predicate.column())?;

    let mask = match predicate {
        Predicate::ConstantEquals { value, .. } => {
            let floats = col.cast(&DataType::Float64)?;
            floats
                .f64()?
                .iter()
                .map(|v| v.is_some_and(|v| v == *value))
                .collect()
        }
        Predicate::RangeWithin { low, high, .. } => {
            let floats = col.cast(&DataType::Float64)?;
            floats
                .f64()?
                .iter()
                .map(|v| v.is_some_and(|v| *low <= v && v <= *high))
                .collect()
        }
        Predicate::ValueIn { allowed, .. } => text_values(col)?
            .into_iter()
            .map(|v| v.is_some_and(|v| allowed.contains(&v)))
            .collect(),
    };

    Ok(mask)
}
