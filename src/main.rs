use std::io;

use anyhow::Context;
use clap::Parser;
use patron_registry::{
    config::{Config, Mode},
    core::registry::PatronRegistry,
    logging,
    shell::{self, check},
};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init_logger(config.verbose);
    tracing::debug!(?config, "starting");

    match config.mode() {
        Mode::Shell => {
            let mut registry = PatronRegistry::new();
            shell::run(&config, &mut registry, io::stdin().lock(), io::stdout().lock())
                .context("interactive session failed")?;
        }
        Mode::Check { path, json } => {
            let out = check::check_file(&path, json).context("failed to encode check output")?;
            println!("{out}");
        }
    }
    Ok(())
}
