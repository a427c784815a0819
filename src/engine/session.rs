//! Caller-owned exploration state: one dataset and its active predicates

use std::path::{Path, PathBuf};

use log::warn;
use polars::prelude::*;

use super::classify::{classify_columns, ColumnKind};
use super::error::{ExploreError, ExploreResult};
use super::filter::{apply_filters, validate_predicate};
use super::loader::{load_dataset, LoadedDataset};
use super::predicate::{Predicate, PredicateSet};

/// One user's view of one dataset.
///
/// The loaded frame is never modified; [`Session::filtered`] derives the
/// filtered view from it on every call. Sessions share nothing, so separate
/// users each hold their own.
#[derive(Debug, Default)]
pub struct Session {
    source: Option<PathBuf>,
    dataset: Option<DataFrame>,
    predicates: PredicateSet,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session over an in-memory frame.
    pub fn with_dataset(frame: DataFrame) -> Self {
        Self {
            source: None,
            dataset: Some(frame),
            predicates: PredicateSet::new(),
        }
    }

    /// Load a file, replacing the current dataset and clearing predicates.
    ///
    /// On failure the session keeps its previous dataset and predicates.
    pub fn load(&mut self, path: &Path, infer_schema_length: usize) -> ExploreResult<LoadedDataset> {
        let loaded = load_dataset(path, infer_schema_length)?;
        self.source = Some(loaded.path.clone());
        self.dataset = Some(loaded.frame.clone());
        self.predicates.clear();
        Ok(loaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    /// File the current dataset came from, if it was loaded from disk.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// The dataset as loaded, without any filtering.
    pub fn dataset(&self) -> ExploreResult<&DataFrame> {
        self.dataset.as_ref().ok_or(ExploreError::NotLoaded)
    }

    /// Column kinds of the loaded dataset.
    pub fn column_kinds(&self) -> ExploreResult<Vec<(String, ColumnKind)>> {
        Ok(classify_columns(self.dataset()?))
    }

    pub fn predicates(&self) -> &PredicateSet {
        &self.predicates
    }

    /// Validate `predicate` against the dataset and add it to the active set.
    ///
    /// A rejected predicate leaves the active set untouched.
    pub fn add_predicate(&mut self, predicate: Predicate) -> ExploreResult<()> {
        let df = self.dataset()?;
        if let Err(err) = validate_predicate(df, &predicate) {
            warn!("rejected filter {}: {}", predicate, err);
            return Err(err);
        }
        self.predicates.push(predicate);
        Ok(())
    }

    pub fn remove_predicate(&mut self, index: usize) -> Option<Predicate> {
        self.predicates.remove(index)
    }

    pub fn clear_predicates(&mut self) {
        self.predicates.clear();
    }

    /// The dataset restricted to the active predicates.
    pub fn filtered(&self) -> ExploreResult<DataFrame> {
        apply_filters(self.dataset()?, &self.predicates)
    }
}
