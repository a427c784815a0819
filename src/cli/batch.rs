//! One-shot, non-interactive run for scripted use

use anyhow::Result;

use super::args::Cli;
use super::views::{show_correlation, show_filtered, show_overview, show_unique};
use crate::engine::{ExploreError, Session};
use crate::report::{export_report, save_dataset, ExplorationReport};
use crate::utils::{print_info, print_success};

/// Print the overview, filtered rows and correlation matrix, then write any
/// requested outputs. Invalid filters abort the run.
pub fn run_batch(session: &mut Session, cli: &Cli) -> Result<()> {
    for predicate in &cli.filters {
        session.add_predicate(predicate.clone())?;
    }

    show_overview(session.dataset()?, cli.head)?;
    let filtered = show_filtered(session, cli.head)?;

    match show_correlation(&filtered) {
        Ok(()) => {}
        Err(err) => match err.downcast_ref::<ExploreError>() {
            Some(ExploreError::InsufficientColumns { .. }) => print_info(&err.to_string()),
            _ => return Err(err),
        },
    }

    if let Some(column) = &cli.unique {
        show_unique(&filtered, column)?;
    }

    if let Some(path) = &cli.output {
        save_dataset(&filtered, path)?;
        print_success(&format!(
            "Saved {} row(s) to {}",
            filtered.height(),
            path.display()
        ));
    }

    if let Some(path) = &cli.report {
        let report = ExplorationReport::build(
            session.source(),
            session.dataset()?,
            &filtered,
            session.predicates(),
        );
        export_report(&report, path)?;
        print_success(&format!("Report written to {}", path.display()));
    }

    Ok(())
}
