//! In-memory library patron registry with line-delimited bulk import.
//!
//! # Examples
//!
//! Adding and listing with [`core::registry::PatronRegistry`]:
//! ```
//! use patron_registry::core::registry::PatronRegistry;
//!
//! let mut registry = PatronRegistry::new();
//! assert!(registry.add("1245789", " Sarah Jones ", "1136 Gorden Ave.", 40.54));
//! assert!(!registry.add("1245789", "Someone Else", "Elsewhere", 1.0));
//!
//! let patrons = registry.list();
//! assert_eq!(patrons.len(), 1);
//! assert_eq!(patrons[0].name(), "Sarah Jones");
//! ```
//!
//! Importing lines from any buffered reader:
//! ```
//! use patron_registry::core::registry::PatronRegistry;
//!
//! let mut registry = PatronRegistry::new();
//! let input = "1245789-Sarah Jones-1136 Gorden Ave. Orlando, FL 32822-40.54\nbad-line\n";
//! let report = registry.import_lines(input.as_bytes(), "inline");
//! assert_eq!(report.summary(), "Imported: 1/2 (1 failed)\nErrors: Bad format: bad-line");
//! ```
#![deny(missing_docs)]

/// Command-line configuration.
pub mod config;
/// Patron registry and validation.
pub mod core;
/// Import line parsing and reporting.
pub mod import;
/// Tracing subscriber setup.
pub mod logging;
/// Patron record types.
pub mod patron;
/// Console front end.
pub mod shell;
/// Shared primitive aliases and constants.
pub mod types;
