//! Patron record and raw candidate types.

use serde::{Deserialize, Serialize};

use crate::types::Fine;

/// Validated patron record as held by the registry.
///
/// Fields are only reachable through getters; a stored record never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patron {
    id: String,
    name: String,
    address: String,
    fine: Fine,
}

impl Patron {
    pub(crate) fn new(id: String, name: String, address: String, fine: Fine) -> Self {
        Self {
            id,
            name,
            address,
            fine,
        }
    }

    /// Seven-digit identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Full name, trimmed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mailing address, trimmed.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Outstanding fine.
    pub fn fine(&self) -> Fine {
        self.fine
    }
}

/// Untrimmed candidate handed to the validator.
#[derive(Debug, Clone, PartialEq)]
pub struct PatronDraft {
    /// Raw id text; must already be exactly seven digits.
    pub id: String,
    /// Raw name, may carry surrounding whitespace.
    pub name: String,
    /// Raw address, may carry surrounding whitespace.
    pub address: String,
    /// Parsed fine.
    pub fine: Fine,
}

impl PatronDraft {
    /// Builds a draft from borrowed field text.
    pub fn new(id: &str, name: &str, address: &str, fine: Fine) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            address: address.to_string(),
            fine,
        }
    }
}
