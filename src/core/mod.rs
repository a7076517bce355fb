//! Core data types for reference lookups.
//!
//! - [`ReferenceTable`](table::ReferenceTable): the dataset, rows of nullable text cells
//! - [`Query`](query::Query): a validated code token and file number
//! - [`FileRange`](range::FileRange): the file interval a description covers
//!
//! ## Reference Strings
//!
//! A reference string is split on `/`:
//!
//! | Input | File number | Code token |
//! |-------|-------------|------------|
//! | `FO 371/15/12` | 15 | 12 |
//! | `FO 371/7/2215/44` | 7 | 44 |
//!
//! ## Description Formats
//!
//! | Description | File range |
//! |-------------|------------|
//! | `Code 12, Files 10 - 20` | 10-20 |
//! | `Code 12, File 15` | 15 |
//! | `Code 12` | none |

pub mod query;
pub mod range;
pub mod table;
