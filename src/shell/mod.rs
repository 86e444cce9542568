//! Console front end: startup import, interactive menu and one-shot check.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::{config::Config, core::registry::PatronRegistry};

/// Bundled dataset loader.
pub mod bootstrap;
/// Non-interactive single-file import.
pub mod check;
/// Interactive menu loop.
pub mod menu;

const BANNER: &str = "=== Library Management System ===";

/// Terminal failure while talking to the user.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading the prompt stream or writing output failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Prints the banner, loads the bundled dataset and runs the menu until the
/// user exits or input ends.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    registry: &mut PatronRegistry,
    input: R,
    mut output: W,
) -> Result<(), ShellError> {
    writeln!(output, "\n{BANNER}")?;
    if !config.no_bootstrap {
        bootstrap::load_dataset(registry, config.dataset.as_deref(), &mut output)?;
    }
    menu::Shell::new(registry, input, output).run()
}
