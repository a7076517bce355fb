//! # fo-lookup
//!
//! A library for finding records in the FO correspondence catalog from a
//! slash-delimited reference string.
//!
//! Catalog descriptions are free text such as `Code 12, Files 10 - 20`. A
//! reference string like `FO 371/15/12` names a code (`12`, after the last
//! `/`) and a file number (`15`, between the first and second `/`).
//! `fo-lookup` finds the records whose description mentions exactly that code
//! and whose file or file range covers that number.
//!
//! ## Features
//!
//! - **Precise code matching**: `Code 12` never matches `Code 120` or `Code 126`
//! - **Range extraction**: understands both `Files a - b` and `File n`
//! - **Read-only lookups**: the catalog is borrowed, never modified
//! - **Readable statuses**: malformed, excluded and empty lookups return a sentence
//!
//! ## Example
//!
//! ```rust,no_run
//! use fo_lookup::{lookup, LookupOutcome, ReferenceCatalog};
//! use std::path::Path;
//!
//! let catalog = ReferenceCatalog::load_from_file(Path::new("fo_1920-25.csv")).unwrap();
//!
//! match lookup("FO 371/15/12", &catalog.table) {
//!     LookupOutcome::Matches(matches) => {
//!         for row in &matches.rows {
//!             println!("{:?}: {}", row.citable_reference, row.description);
//!         }
//!     }
//!     LookupOutcome::Status(status) => println!("{status}"),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: CSV catalog loading
//! - [`core`]: Tables, queries and file ranges
//! - [`matching`]: The lookup pipeline
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: Web server for browser-based lookups

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod web;

// Re-export commonly used types for convenience
pub use catalog::store::ReferenceCatalog;
pub use crate::core::query::Query;
pub use crate::core::range::FileRange;
pub use crate::core::table::ReferenceTable;
pub use matching::engine::{lookup, LookupOutcome, LookupStatus, ReferenceMatcher};
pub use matching::filter::{MatchTable, MatchedReference};
