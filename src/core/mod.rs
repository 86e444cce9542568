//! Patron registry and its admission rules.

/// Authoritative patron collection and bulk import.
pub mod registry;
/// Field-level validation of candidate patrons.
pub mod validate;
