//! Command-line interface
//!
//! `overlay` with no arguments runs the reapply pass; `overlay check` runs
//! the same reconcilers without writing. Both honor the global `--format`,
//! `--verbose`, and `--repo` flags.

mod app;
mod output;
mod reapply;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
