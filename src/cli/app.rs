//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::reapply;
use crate::storage::Repo;

#[derive(Parser)]
#[command(name = "overlay")]
#[command(author, version, about = "Reapplies embedded-llama fork overlays after an upstream sync")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Fork checkout root (defaults to searching upward from the current directory)
    #[arg(long, global = true)]
    pub repo: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reapply any overlays missing from the checkout (the default)
    Reapply,

    /// Report missing overlays without writing anything
    Check,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("Overlay CLI starting");

    let repo = match cli.repo {
        Some(path) => Repo::open(path)?,
        None => Repo::discover()?,
    };
    output.verbose_ctx("repo", &format!("Using checkout at: {}", repo.root().display()));

    match cli.command.unwrap_or(Commands::Reapply) {
        Commands::Reapply => reapply::run(&output, &repo)?,
        Commands::Check => {
            let exit_code = reapply::check(&output, &repo)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}
