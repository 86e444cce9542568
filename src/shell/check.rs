//! One-shot import of a single file, rendered as text or JSON.

use std::path::Path;

use serde::Serialize;

use crate::{
    core::registry::PatronRegistry,
    import::report::ImportReport,
    patron::Patron,
};

#[derive(Serialize)]
struct CheckOutput<'a> {
    report: &'a ImportReport,
    patrons: Vec<Patron>,
}

/// Imports `path` into a fresh registry and renders the report followed by
/// the table, or both as pretty JSON.
pub fn check_file(path: &Path, json: bool) -> serde_json::Result<String> {
    let mut registry = PatronRegistry::new();
    let report = registry.import_from_source(Some(path));

    if json {
        return serde_json::to_string_pretty(&CheckOutput {
            report: &report,
            patrons: registry.export_snapshot().patrons,
        });
    }
    Ok(format!("{report}\n\n{}", registry.render_table()))
}
