//! tablens: Tabular Data Exploration CLI
//!
//! Loads a CSV or Parquet file and runs an interactive session for filtering
//! rows, summarizing distributions and correlating numeric columns.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use tablens::cli::views::show_overview;
use tablens::cli::{load_into_session, prompt_path, run_batch, run_interactive, Cli};
use tablens::engine::Session;
use tablens::utils::{print_banner, print_error, print_info};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    print_banner(env!("CARGO_PKG_VERSION"));

    let mut session = Session::new();

    if cli.no_interactive {
        let input = cli.input.as_ref().ok_or_else(|| {
            anyhow::anyhow!("Input file is required with --no-interactive. Use -i/--input to specify a file.")
        })?;
        load_into_session(&mut session, input, cli.infer_schema_length)?;
        return run_batch(&mut session, &cli);
    }

    let input = match &cli.input {
        Some(path) => path.clone(),
        None => prompt_path("Input file (.csv or .parquet)")?,
    };

    // A failed load leaves the session empty; the menu can load another file.
    if let Err(err) = load_into_session(&mut session, &input, cli.infer_schema_length) {
        print_error(&format!("{:#}", err));
    }

    if !session.is_loaded() && !cli.filters.is_empty() {
        print_info(&format!(
            "{} filter(s) from the command line were not applied; add them from the menu once a file is loaded",
            cli.filters.len()
        ));
    }

    if session.is_loaded() {
        for predicate in &cli.filters {
            if let Err(err) = session.add_predicate(predicate.clone()) {
                print_error(&err.to_string());
            }
        }
        if let Ok(df) = session.dataset() {
            if let Err(err) = show_overview(df, cli.head) {
                print_error(&format!("{:#}", err));
            }
        }
    }

    run_interactive(&mut session, &cli)
}
