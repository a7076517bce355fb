//! Reference lookup pipeline.
//!
//! - [`ReferenceMatcher`](engine::ReferenceMatcher): main entry point
//! - [`LookupOutcome`](engine::LookupOutcome): a result table or a status
//! - [`LookupStatus`](engine::LookupStatus): the status sentences shown to users
//!
//! ## Pipeline
//!
//! 1. **Decompose**: split the reference string into a code token and a file number
//! 2. **Exclude**: code `126` is never searched
//! 3. **Text match**: keep descriptions containing `Code <token>` at a word boundary
//! 4. **Range filter**: keep descriptions whose `Files a - b` or `File n` covers the file
//! 5. **Project**: keep the `Citable Reference` and `Description` columns
//!
//! An empty text match and an empty range filter are reported with the same
//! "no match" message.
//!
//! ## Example
//!
//! ```rust
//! use fo_lookup::core::table::ReferenceTable;
//! use fo_lookup::matching::engine::ReferenceMatcher;
//!
//! let table = ReferenceTable::new(
//!     vec!["Citable Reference".to_string(), "Description".to_string()],
//!     vec![vec![
//!         Some("FO 371/4383".to_string()),
//!         Some("Code 12, Files 10 - 20".to_string()),
//!     ]],
//! )
//! .unwrap();
//!
//! let matcher = ReferenceMatcher::new(&table);
//! let outcome = matcher.lookup("FO 371/15/12");
//! assert_eq!(outcome.matches().map(|m| m.len()), Some(1));
//! ```

pub mod engine;
pub mod filter;
pub mod text;
