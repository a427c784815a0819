//! Interactive exploration session
//!
//! A menu loop over one [`Session`]. Every action reads the session, shows a
//! result and returns to the menu; engine and I/O errors are printed and the
//! session carries on with its previous state. Only a failing terminal prompt
//! ends the loop.

use std::fmt;

use anyhow::Result;
use dialoguer::Select;
use log::debug;

use super::args::Cli;
use super::prompts::{
    confirm_step, prompt_path, prompt_predicate, select_column, select_columns,
};
use super::views::{
    numeric_kinds, show_correlation, show_filtered, show_overview, show_plot, show_unique,
    PlotKind,
};
use crate::engine::{ColumnKind, Session};
use crate::report::{export_report, save_dataset, ExplorationReport};
use crate::utils::{
    create_spinner, finish_with_error, finish_with_success, print_dataset_stats, print_error,
    print_info, print_section_header, print_success, FILTER,
};

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Overview,
    Plot,
    AddFilter,
    ListFilters,
    RemoveFilter,
    ClearFilters,
    ShowFiltered,
    UniqueValues,
    Correlation,
    SaveFiltered,
    ExportReport,
    LoadFile,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 13] = [
        MenuAction::Overview,
        MenuAction::Plot,
        MenuAction::AddFilter,
        MenuAction::ListFilters,
        MenuAction::RemoveFilter,
        MenuAction::ClearFilters,
        MenuAction::ShowFiltered,
        MenuAction::UniqueValues,
        MenuAction::Correlation,
        MenuAction::SaveFiltered,
        MenuAction::ExportReport,
        MenuAction::LoadFile,
        MenuAction::Quit,
    ];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuAction::Overview => "Data overview",
            MenuAction::Plot => "Generate plot summary",
            MenuAction::AddFilter => "Add filter",
            MenuAction::ListFilters => "List active filters",
            MenuAction::RemoveFilter => "Remove a filter",
            MenuAction::ClearFilters => "Clear all filters",
            MenuAction::ShowFiltered => "Show filtered data",
            MenuAction::UniqueValues => "Unique non-numeric values",
            MenuAction::Correlation => "Correlation matrix",
            MenuAction::SaveFiltered => "Save filtered data",
            MenuAction::ExportReport => "Export JSON report",
            MenuAction::LoadFile => "Load another file",
            MenuAction::Quit => "Quit",
        };
        write!(f, "{}", label)
    }
}

/// Load `path` into the session with a spinner; failures keep the old state.
pub fn load_into_session(session: &mut Session, path: &std::path::Path, infer: usize) -> Result<()> {
    let spinner = create_spinner("Loading dataset...");
    match session.load(path, infer) {
        Ok(loaded) => {
            finish_with_success(&spinner, "Dataset loaded");
            print_dataset_stats(&loaded.path, loaded.rows, loaded.cols, loaded.memory_mb);
            Ok(())
        }
        Err(err) => {
            finish_with_error(&spinner, "Dataset not loaded");
            Err(err.into())
        }
    }
}

/// Run the menu loop until the user quits.
pub fn run_interactive(session: &mut Session, cli: &Cli) -> Result<()> {
    loop {
        println!();
        let status = if session.is_loaded() {
            format!("{}{} active filter(s)", FILTER, session.predicates().len())
        } else {
            "no dataset loaded".to_string()
        };

        let choice = Select::new()
            .with_prompt(format!("What next? ({})", status))
            .items(&MenuAction::ALL)
            .default(0)
            .interact_opt()?;

        let action = match choice {
            Some(i) => MenuAction::ALL[i],
            None => MenuAction::Quit,
        };
        debug!("menu action: {:?}", action);

        if action == MenuAction::Quit {
            return Ok(());
        }

        if let Err(err) = handle_action(session, cli, action) {
            // A broken terminal cannot be recovered from inside the loop.
            if err.downcast_ref::<dialoguer::Error>().is_some() {
                return Err(err);
            }
            print_error(&format!("{:#}", err));
        }
    }
}

fn handle_action(session: &mut Session, cli: &Cli, action: MenuAction) -> Result<()> {
    match action {
        MenuAction::Overview => show_overview(session.dataset()?, cli.head),
        MenuAction::Plot => plot(session, cli),
        MenuAction::AddFilter => add_filter(session),
        MenuAction::ListFilters => {
            list_filters(session);
            Ok(())
        }
        MenuAction::RemoveFilter => remove_filter(session),
        MenuAction::ClearFilters => {
            session.clear_predicates();
            print_success("Cleared all filters");
            Ok(())
        }
        MenuAction::ShowFiltered => show_filtered(session, cli.head).map(|_| ()),
        MenuAction::UniqueValues => {
            let filtered = session.filtered()?;
            let kinds = session.column_kinds()?;
            match select_column("Select Column", &kinds)? {
                Some(i) => show_unique(&filtered, &kinds[i].0),
                None => Ok(()),
            }
        }
        MenuAction::Correlation => show_correlation(&session.filtered()?),
        MenuAction::SaveFiltered => {
            let filtered = session.filtered()?;
            let path = prompt_path("Output path (.csv or .parquet)")?;
            save_dataset(&filtered, &path)?;
            print_success(&format!("Saved {} row(s) to {}", filtered.height(), path.display()));
            Ok(())
        }
        MenuAction::ExportReport => {
            let report = ExplorationReport::build(
                session.source(),
                session.dataset()?,
                &session.filtered()?,
                session.predicates(),
            );
            let path = prompt_path("Report path (.json)")?;
            export_report(&report, &path)?;
            print_success(&format!("Report written to {}", path.display()));
            Ok(())
        }
        MenuAction::LoadFile => {
            if !session.predicates().is_empty()
                && !confirm_step("Loading a new file clears the active filters. Continue?")?
            {
                return Ok(());
            }
            let path = prompt_path("Input file (.csv or .parquet)")?;
            load_into_session(session, &path, cli.infer_schema_length)
        }
        MenuAction::Quit => Ok(()),
    }
}

fn plot(session: &Session, cli: &Cli) -> Result<()> {
    let filtered = session.filtered()?;

    let labels: Vec<&str> = PlotKind::ALL.iter().map(|k| k.label()).collect();
    let Some(choice) = Select::new()
        .with_prompt("Select Graph Type")
        .items(&labels)
        .default(0)
        .interact_opt()?
    else {
        return Ok(());
    };
    let kind = PlotKind::ALL[choice];

    let numeric = numeric_kinds(&filtered);
    if numeric.is_empty() {
        print_info("The dataset has no numeric columns to plot");
        return Ok(());
    }

    let columns = select_columns("Select Columns (space to toggle)", &numeric)?;
    if columns.is_empty() {
        print_info("No columns selected");
        return Ok(());
    }

    show_plot(&filtered, kind, &columns, cli.bins)
}

fn add_filter(session: &mut Session) -> Result<()> {
    let kinds = session.column_kinds()?;
    let Some(index) = select_column("Filter Data: select a column", &kinds)? else {
        return Ok(());
    };
    let (column, kind): (String, ColumnKind) = kinds[index].clone();

    let Some(predicate) = prompt_predicate(session.dataset()?, &column, kind)? else {
        print_info("No filter added");
        return Ok(());
    };

    let text = predicate.to_string();
    session.add_predicate(predicate)?;
    print_success(&format!("Added filter {}", text));
    Ok(())
}

fn list_filters(session: &Session) {
    print_section_header("Active Filters");
    if session.predicates().is_empty() {
        print_info("No active filters");
        return;
    }
    for (i, predicate) in session.predicates().iter().enumerate() {
        println!("      {}. {}", i + 1, predicate);
    }
}

fn remove_filter(session: &mut Session) -> Result<()> {
    if session.predicates().is_empty() {
        print_info("No active filters");
        return Ok(());
    }

    let items: Vec<String> = session.predicates().iter().map(|p| p.to_string()).collect();
    let Some(index) = Select::new()
        .with_prompt("Remove which filter?")
        .items(&items)
        .default(0)
        .interact_opt()?
    else {
        return Ok(());
    };

    if let Some(removed) = session.remove_predicate(index) {
        print_success(&format!("Removed filter {}", removed));
    }
    Ok(())
}
