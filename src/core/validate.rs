//! Field-level admission rules for candidate patrons.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    patron::{Patron, PatronDraft},
    types::{FINE_MAX, FINE_MIN, Fine, ID_LEN},
};

use super::registry::RegistryError;

// ASCII only: `\d` would also accept other Unicode digit classes.
static ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^[0-9]{{{ID_LEN}}}$")).expect("id pattern is a valid regex")
});

/// Returns true when `id` is exactly [`ID_LEN`] ASCII digits with nothing around them.
pub fn is_valid_id(id: &str) -> bool {
    ID_PATTERN.is_match(id)
}

/// Returns true when `fine` lies in the closed admissible range. NaN is outside.
pub fn is_valid_fine(fine: Fine) -> bool {
    (FINE_MIN..=FINE_MAX).contains(&fine)
}

/// Checks `draft` and produces the trimmed record to store.
///
/// The id is matched before trimming, so an id with surrounding whitespace
/// never reaches storage. `exists` answers whether an id is already taken.
pub(crate) fn admit(
    draft: &PatronDraft,
    exists: impl Fn(&str) -> bool,
) -> Result<Patron, RegistryError> {
    if !is_valid_id(&draft.id) {
        return Err(RegistryError::InvalidId(draft.id.clone()));
    }
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(RegistryError::BlankName);
    }
    let address = draft.address.trim();
    if address.is_empty() {
        return Err(RegistryError::BlankAddress);
    }
    if !is_valid_fine(draft.fine) {
        return Err(RegistryError::FineOutOfRange(draft.fine));
    }
    if exists(&draft.id) {
        return Err(RegistryError::DuplicateId(draft.id.clone()));
    }

    Ok(Patron::new(
        draft.id.trim().to_string(),
        name.to_string(),
        address.to_string(),
        draft.fine,
    ))
}
