//! Command-line configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level options.
#[derive(Debug, Clone, Parser)]
#[command(name = "patron-registry")]
#[command(about = "In-memory library patron registry with bulk import")]
pub struct Config {
    /// Dataset loaded before the menu starts; the copy built into the
    /// binary when omitted.
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Start with an empty registry.
    #[arg(long)]
    pub no_bootstrap: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// What to run; the interactive shell when omitted.
    #[command(subcommand)]
    pub mode: Option<Mode>,
}

/// Run modes.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Mode {
    /// Interactive menu.
    Shell,
    /// Import one file into an empty registry and print the outcome.
    Check {
        /// File of `id-name-address-fine` lines.
        path: PathBuf,
        /// Print the report and records as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Config {
    /// Selected mode, defaulting to [`Mode::Shell`].
    pub fn mode(&self) -> Mode {
        self.mode.clone().unwrap_or(Mode::Shell)
    }
}
