//! CLI module - argument parsing, prompts and the two run modes

mod args;
pub mod batch;
pub mod interactive;
mod prompts;
pub mod views;

pub use args::Cli;
pub use batch::run_batch;
pub use interactive::{load_into_session, run_interactive};
pub use prompts::*;
