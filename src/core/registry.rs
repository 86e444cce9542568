use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    import::{
        line::{LineOutcome, parse_line},
        reader::LineReader,
        report::{FailureReason, ImportReport},
    },
    patron::{Patron, PatronDraft},
    types::{Fine, PatronId},
};

use super::validate;

/// Reason a candidate patron was refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// Id is not exactly seven ASCII digits.
    #[error("id `{0}` is not exactly seven digits")]
    InvalidId(String),
    /// Name is empty after trimming.
    #[error("name is blank")]
    BlankName,
    /// Address is empty after trimming.
    #[error("address is blank")]
    BlankAddress,
    /// Fine outside the inclusive range, or NaN.
    #[error("fine {0} is outside 0..=250")]
    FineOutOfRange(Fine),
    /// Another patron already holds this id.
    #[error("id `{0}` is already registered")]
    DuplicateId(String),
}

/// Ordered copy of the registry contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Records in insertion order.
    pub patrons: Vec<Patron>,
}

const NO_SOURCE: &str = "(none)";
const EMPTY_TABLE: &str = "No patrons";

/// In-memory patron collection keyed by id, listed in insertion order.
#[derive(Debug, Default)]
pub struct PatronRegistry {
    records: HashMap<PatronId, Patron>,
    order: Vec<PatronId>,
}

impl PatronRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a patron. Returns false, leaving the registry
    /// untouched, when any field rule fails or the id is taken.
    pub fn add(&mut self, id: &str, name: &str, address: &str, fine: Fine) -> bool {
        self.try_add(&PatronDraft::new(id, name, address, fine)).is_ok()
    }

    /// Like [`Self::add`], but reports which rule refused the draft.
    pub fn try_add(&mut self, draft: &PatronDraft) -> Result<(), RegistryError> {
        let patron = match validate::admit(draft, |id| self.records.contains_key(id)) {
            Ok(patron) => patron,
            Err(err) => {
                debug!(id = %draft.id, reason = %err, "patron rejected");
                return Err(err);
            }
        };

        debug!(id = %patron.id(), "patron admitted");
        let id = patron.id().to_string();
        self.order.push(id.clone());
        self.records.insert(id, patron);
        Ok(())
    }

    /// Removes the patron with the trimmed `id`. A missing id is a plain `false`.
    pub fn remove(&mut self, id: &str) -> bool {
        let id = id.trim();
        if self.records.remove(id).is_none() {
            debug!(id, "remove: not found");
            return false;
        }
        Self::remove_from_order(&mut self.order, id);
        debug!(id, "patron removed");
        true
    }

    /// Owned copy of every record in insertion order.
    pub fn list(&self) -> Vec<Patron> {
        self.iter().cloned().collect()
    }

    /// Borrowing iterator in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Patron> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Looks up a patron by exact id.
    pub fn get(&self, id: &str) -> Option<&Patron> {
        self.records.get(id)
    }

    /// Ids in insertion order.
    pub fn ordered_ids(&self) -> &[PatronId] {
        &self.order
    }

    /// Number of stored patrons.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no patron is stored.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Serializable ordered copy of the registry.
    pub fn export_snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            patrons: self.list(),
        }
    }

    /// Imports `id-name-address-fine` lines from the file at `source`.
    ///
    /// Faults never escape: a missing source, an unreadable file and every bad
    /// line become entries of the returned report.
    pub fn import_from_source(&mut self, source: Option<&Path>) -> ImportReport {
        let Some(path) = source.filter(|p| p.exists()) else {
            let origin = source.map_or_else(|| NO_SOURCE.to_string(), |p| p.display().to_string());
            warn!(source = %origin, "import source not found");
            let mut report = ImportReport::new();
            report.fail(FailureReason::FileNotFound, origin);
            return report;
        };

        let origin = path.display().to_string();
        match File::open(path) {
            Ok(file) => self.import_lines(BufReader::new(file), &origin),
            Err(err) => {
                warn!(source = %origin, error = %err, "import source could not be opened");
                let mut report = ImportReport::new();
                report.fail(FailureReason::Io(err.to_string()), origin);
                report
            }
        }
    }

    /// Runs the per-line import loop over `reader`. `origin` names the source
    /// in the failure entry written if reading itself fails.
    pub fn import_lines<R: BufRead>(&mut self, reader: R, origin: &str) -> ImportReport {
        let mut report = ImportReport::new();

        for line in LineReader::new(reader) {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    warn!(source = origin, error = %err, "import aborted by read fault");
                    report.fail(FailureReason::Io(err.to_string()), origin);
                    break;
                }
            };
            report.begin_line();
            let outcome = self.import_line(&line);
            report.record_line(&outcome, &line);
        }

        info!(
            source = origin,
            total = report.total(),
            succeeded = report.succeeded(),
            failed = report.failed(),
            "import finished"
        );
        report
    }

    fn import_line(&mut self, line: &str) -> LineOutcome {
        match parse_line(line) {
            Ok(draft) => match self.try_add(&draft) {
                Ok(()) => LineOutcome::Admitted,
                Err(err) => LineOutcome::Rejected(err),
            },
            Err(fault) => {
                debug!(?fault, line, "structural fault");
                LineOutcome::Structural(fault)
            }
        }
    }

    /// Fixed-width listing: one header line, then one row per patron.
    pub fn render_table(&self) -> String {
        if self.is_empty() {
            return EMPTY_TABLE.to_string();
        }

        let mut out = format!(
            "{:<8} | {:<17} | {:<20} | {}",
            "ID", "Name", "Address", "Fine"
        );
        for p in self.iter() {
            out.push('\n');
            out.push_str(&format!(
                "{:<8} | {:<17} | {:<20} | {:.2}",
                p.id(),
                p.name(),
                p.address(),
                p.fine()
            ));
        }
        out
    }

    fn remove_from_order(order: &mut Vec<PatronId>, id: &str) {
        if let Some(pos) = order.iter().position(|x| x == id) {
            order.remove(pos);
        }
    }
}
