//! Line-oriented bulk import: parsing and outcome reporting.

/// Per-line decomposition into a candidate patron.
pub mod line;
/// Line splitting over buffered readers.
pub mod reader;
/// Aggregate import report.
pub mod report;
