//! Import outcome accumulator and its text summary.

use std::fmt;

use serde::{Serialize, Serializer};

use super::line::{LineOutcome, StructuralFault};

/// Why a line, or the whole source, failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The source does not exist.
    FileNotFound,
    /// Fewer than four fields.
    BadFormat,
    /// Fine field is not numeric.
    BadFine,
    /// Well-shaped record refused by the validator.
    InvalidData,
    /// Reading the source failed; carries the fault message.
    Io(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound => f.write_str("File not found"),
            Self::BadFormat => f.write_str("Bad format"),
            Self::BadFine => f.write_str("Bad fine"),
            Self::InvalidData => f.write_str("Invalid data"),
            Self::Io(msg) => write!(f, "I/O: {msg}"),
        }
    }
}

impl Serialize for FailureReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<StructuralFault> for FailureReason {
    fn from(value: StructuralFault) -> Self {
        match value {
            StructuralFault::BadFormat => Self::BadFormat,
            StructuralFault::BadFine => Self::BadFine,
        }
    }
}

/// One failure entry: the reason plus the offending line, or the source name
/// for source-level faults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportFailure {
    /// Failure reason.
    pub reason: FailureReason,
    /// Offending line text or source name.
    pub line: String,
}

/// Result of a single import call.
///
/// Every line read is counted in `total` and ends up either in `succeeded` or
/// in exactly one failure entry. Failures keep encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    total: usize,
    succeeded: usize,
    failures: Vec<ImportFailure>,
}

impl ImportReport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Lines seen.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Lines stored in the registry.
    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    /// Number of failure entries.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Failure entries in encounter order.
    pub fn failures(&self) -> &[ImportFailure] {
        &self.failures
    }

    /// True when nothing failed, including the source itself.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub(crate) fn begin_line(&mut self) {
        self.total += 1;
    }

    pub(crate) fn record_line(&mut self, outcome: &LineOutcome, line: &str) {
        match outcome {
            LineOutcome::Admitted => self.succeeded += 1,
            LineOutcome::Structural(fault) => self.fail((*fault).into(), line),
            LineOutcome::Rejected(_) => self.fail(FailureReason::InvalidData, line),
        }
    }

    pub(crate) fn fail(&mut self, reason: FailureReason, line: impl Into<String>) {
        self.failures.push(ImportFailure {
            reason,
            line: line.into(),
        });
    }

    /// Renders `Imported: S/T (F failed)`, plus an `Errors:` line listing each
    /// failure when there is at least one.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Imported: {}/{} ({} failed)",
            self.succeeded,
            self.total,
            self.failed()
        );
        if !self.failures.is_empty() {
            let errors = self
                .failures
                .iter()
                .map(|f| format!("{}: {}", f.reason, f.line))
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str("\nErrors: ");
            out.push_str(&errors);
        }
        out
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
