//! Startup import of the default patron dataset.

use std::{io::Write, path::Path};

use tracing::info;

use crate::core::registry::PatronRegistry;

use super::ShellError;

/// File name of the dataset shipped with the crate.
pub const BUNDLED_DATASET_NAME: &str = "patrons_sample.txt";

/// Copy of `data/patrons_sample.txt` built into the binary, so startup does
/// not depend on the working directory.
pub const BUNDLED_DATASET: &str = include_str!("../../data/patrons_sample.txt");

/// Imports the dataset and prints the summary.
///
/// With no `dataset` path the built-in copy is used. A path that does not
/// exist prints a not-found notice naming the file.
pub fn load_dataset<W: Write>(
    registry: &mut PatronRegistry,
    dataset: Option<&Path>,
    out: &mut W,
) -> Result<(), ShellError> {
    let Some(dataset) = dataset else {
        info!(dataset = BUNDLED_DATASET_NAME, "loading built-in dataset");
        let report = registry.import_lines(BUNDLED_DATASET.as_bytes(), BUNDLED_DATASET_NAME);
        writeln!(out, "\n{report}")?;
        return Ok(());
    };

    match dataset.try_exists() {
        Ok(true) => {
            info!(dataset = %dataset.display(), "loading dataset");
            let report = registry.import_from_source(Some(dataset));
            writeln!(out, "\n{report}")?;
        }
        Ok(false) => {
            let name = dataset
                .file_name()
                .map_or_else(|| dataset.display().to_string(), |n| n.to_string_lossy().into_owned());
            writeln!(out, "{name} not found.")?;
        }
        Err(err) => writeln!(out, "Error loading sample file: {err}")?,
    }
    Ok(())
}
