//! Shared primitive aliases and record-format constants.

/// Seven-digit patron identifier, stored as text to keep leading zeros.
pub type PatronId = String;
/// Outstanding fine amount.
pub type Fine = f64;

/// Exact number of ASCII digits in a patron id.
pub const ID_LEN: usize = 7;
/// Smallest admissible fine, inclusive.
pub const FINE_MIN: Fine = 0.0;
/// Largest admissible fine, inclusive.
pub const FINE_MAX: Fine = 250.0;

/// Separator between fields of an import line.
pub const FIELD_DELIMITER: char = '-';
/// Fields per import line; the last one absorbs any further delimiters.
pub const FIELD_COUNT: usize = 4;
