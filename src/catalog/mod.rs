//! FO correspondence catalog loading.
//!
//! The catalog is a CSV export with a header row. Only two columns matter to
//! lookups, `Citable Reference` and `Description`; every other column is kept
//! but ignored. Gzip-compressed exports (`.csv.gz`) are read transparently.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fo_lookup::ReferenceCatalog;
//! use std::path::Path;
//!
//! let catalog = ReferenceCatalog::load_from_file(Path::new("fo_1920-25.csv")).unwrap();
//! let summary = catalog.summary();
//! println!("{} rows, {} with a file range", summary.rows, summary.with_file_range);
//! ```

pub mod store;
