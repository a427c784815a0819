//! Column classification by storage type

use std::fmt;

use polars::prelude::*;
use serde::Serialize;

use super::error::{ExploreError, ExploreResult};

/// Which predicates and summaries a column supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Integer or floating-point storage: constant/range filters, histograms,
    /// box plots, scatter plots and correlation.
    Numeric,
    /// Everything else (strings, booleans, dates, mixed content): set
    /// membership filters and value listings.
    Categorical,
}

impl ColumnKind {
    /// Kind for a polars storage type.
    ///
    /// Only the storage type counts. A string column holding `"42"` stays
    /// categorical so a partial reload can never flip a column's kind.
    pub fn of_dtype(dtype: &DataType) -> Self {
        if dtype.is_primitive_numeric() {
            ColumnKind::Numeric
        } else {
            ColumnKind::Categorical
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Categorical => write!(f, "categorical"),
        }
    }
}

/// Classify every column of the dataset, in column order.
///
/// Works on zero-row frames too, since only the schema is consulted.
pub fn classify_columns(df: &DataFrame) -> Vec<(String, ColumnKind)> {
    df.get_columns()
        .iter()
        .map(|col| (col.name().to_string(), ColumnKind::of_dtype(col.dtype())))
        .collect()
}

/// Kind of a single named column.
pub fn column_kind(df: &DataFrame, name: &str) -> ExploreResult<ColumnKind> {
    let col = lookup_column(df, name)?;
    Ok(ColumnKind::of_dtype(col.dtype()))
}

/// Names of the numeric columns, in column order.
pub fn numeric_columns(df: &DataFrame) -> Vec<String> {
    classify_columns(df)
        .into_iter()
        .filter(|(_, kind)| *kind == ColumnKind::Numeric)
        .map(|(name, _)| name)
        .collect()
}

/// Resolve a column by name, reporting the available names when it is absent.
pub(crate) fn lookup_column<'a>(df: &'a DataFrame, name: &str) -> ExploreResult<&'a Column> {
    df.column(name).map_err(|_| ExploreError::UnknownColumn {
        column: name.to_string(),
        available: df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect(),
    })
}
