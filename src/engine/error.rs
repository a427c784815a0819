//! Error types for the exploration engine.
//!
//! Every variant is recoverable: the interactive session reports it and keeps
//! running with its previous state.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

use super::classify::ColumnKind;

/// Errors raised while loading, filtering or summarizing a dataset.
#[derive(Debug, Error)]
pub enum ExploreError {
    /// The input file could not be read or parsed into a table.
    #[error("failed to load '{}': {message}", .path.display())]
    Load { path: PathBuf, message: String },

    /// A predicate or summary referenced a column that is not in the dataset.
    #[error("column '{column}' not found. Available columns: {available:?}")]
    UnknownColumn {
        column: String,
        available: Vec<String>,
    },

    /// The operation is not valid for the column's kind.
    #[error("{operation} requires a {expected} column, but '{column}' is {actual}")]
    TypeMismatch {
        column: String,
        operation: &'static str,
        expected: ColumnKind,
        actual: ColumnKind,
    },

    /// A range predicate whose lower bound exceeds its upper bound.
    #[error("invalid range for '{column}': start {low} is greater than end {high}")]
    InvalidRange { column: String, low: f64, high: f64 },

    /// Fewer columns than the operation needs.
    #[error("{operation} needs at least {required} numeric column(s), found {found}")]
    InsufficientColumns {
        operation: &'static str,
        required: usize,
        found: usize,
    },

    /// The operation needs an exact number of selected columns.
    #[error("{operation} needs exactly {expected} column(s), got {found}")]
    WrongColumnCount {
        operation: &'static str,
        expected: usize,
        found: usize,
    },

    /// Predicate text that does not follow `<column>:<op>:<args>`.
    #[error("invalid filter '{input}': {reason}")]
    InvalidPredicate { input: String, reason: String },

    /// A data operation was requested before any dataset was loaded.
    #[error("no dataset loaded")]
    NotLoaded,

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

pub type ExploreResult<T> = std::result::Result<T, ExploreError>;
