//! Import line parsing.
//!
//! A line reads `id-name-address-fine`. Splitting stops after the third
//! delimiter, so the fine field takes whatever remains.

use crate::{
    core::registry::RegistryError,
    patron::PatronDraft,
    types::{FIELD_COUNT, FIELD_DELIMITER, Fine},
};

/// A line whose shape prevents it from becoming a candidate at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralFault {
    /// Fewer than four fields.
    BadFormat,
    /// The fine field is not a number.
    BadFine,
}

/// What happened to one import line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Stored in the registry.
    Admitted,
    /// Could not be decomposed into a candidate.
    Structural(StructuralFault),
    /// Well shaped, but refused by the validator.
    Rejected(RegistryError),
}

/// Splits `line` into a raw draft; only the fine is trimmed here.
pub fn parse_line(line: &str) -> Result<PatronDraft, StructuralFault> {
    let fields: Vec<&str> = line.splitn(FIELD_COUNT, FIELD_DELIMITER).collect();
    let &[id, name, address, fine] = fields.as_slice() else {
        return Err(StructuralFault::BadFormat);
    };
    let fine = parse_fine(fine).ok_or(StructuralFault::BadFine)?;
    Ok(PatronDraft::new(id, name, address, fine))
}

/// Parses a fine after trimming surrounding whitespace. Only finite numbers
/// count; `nan`, `inf` and `infinity` are not numbers here.
pub fn parse_fine(text: &str) -> Option<Fine> {
    text.trim().parse::<Fine>().ok().filter(|f| f.is_finite())
}
