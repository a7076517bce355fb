use flate2::read::GzDecoder;
use serde::Serialize;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::range::extract_file_range;
use crate::core::table::{
    ReferenceTable, TableError, CITABLE_REFERENCE_COLUMN, DESCRIPTION_COLUMN,
};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("The file '{0}' was not found")]
    NotFound(PathBuf),

    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] csv::Error),

    #[error("Catalog has no header row")]
    Empty,

    #[error("Line {line} has {found} fields, expected {expected}")]
    TooManyFields {
        line: u64,
        found: usize,
        expected: usize,
    },

    #[error(transparent)]
    Table(#[from] TableError),
}

/// Default dataset file name, looked up in the working directory
pub const DEFAULT_CATALOG_PATH: &str = "FO correspondence discovery download 1920-25.csv";

/// A loaded FO correspondence catalog
#[derive(Debug, Clone)]
pub struct ReferenceCatalog {
    /// Where the catalog was read from (if known)
    pub source: Option<PathBuf>,

    /// All rows, in file order
    pub table: ReferenceTable,
}

/// Counts describing a loaded catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub rows: usize,
    pub columns: Vec<String>,
    /// Required columns that are absent
    pub missing_columns: Vec<String>,
    /// Rows with a non-null description
    pub described: usize,
    /// Rows whose description mentions a file or file range
    pub with_file_range: usize,
}

impl ReferenceCatalog {
    /// Load a catalog from a CSV file, gunzipping `.gz` files.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the file does not exist, or another
    /// `CatalogError` if it cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CatalogError::NotFound(path.to_path_buf())
            } else {
                CatalogError::ReadError(e)
            }
        })?;

        let is_gzipped = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));

        let mut catalog = if is_gzipped {
            Self::from_reader(BufReader::new(GzDecoder::new(file)))?
        } else {
            Self::from_reader(BufReader::new(file))?
        };
        catalog.source = Some(path.to_path_buf());

        debug!(
            "Loaded {} rows from {}",
            catalog.table.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse a catalog from CSV text with a header row.
    ///
    /// Empty cells become nulls. Rows shorter than the header are padded with
    /// nulls; longer rows are rejected.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` if there is no header row, or
    /// `CatalogError::ParseError` / `CatalogError::TooManyFields` for bad rows.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns: Vec<String> = csv_reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if i == 0 {
                    name.trim_start_matches('\u{feff}').to_string()
                } else {
                    name.to_string()
                }
            })
            .collect();

        if columns.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut rows = Vec::new();
        let mut padded = 0usize;
        for result in csv_reader.records() {
            let record = result?;

            if record.len() > columns.len() {
                return Err(CatalogError::TooManyFields {
                    line: record.position().map_or(0, csv::Position::line),
                    found: record.len(),
                    expected: columns.len(),
                });
            }

            let mut cells: Vec<Option<String>> = record
                .iter()
                .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
                .collect();
            if cells.len() < columns.len() {
                padded += 1;
                cells.resize(columns.len(), None);
            }
            rows.push(cells);
        }

        if padded > 0 {
            warn!("{padded} rows had fewer fields than the header and were padded with empty cells");
        }

        Ok(Self {
            source: None,
            table: ReferenceTable::new(columns, rows)?,
        })
    }

    /// Summarize the catalog without running any lookup
    #[must_use]
    pub fn summary(&self) -> CatalogSummary {
        let missing_columns = [CITABLE_REFERENCE_COLUMN, DESCRIPTION_COLUMN]
            .iter()
            .filter(|c| self.table.column_index(c).is_err())
            .map(|c| (*c).to_string())
            .collect();

        let descriptions: Vec<&str> = match self.table.column_index(DESCRIPTION_COLUMN) {
            Ok(column) => (0..self.table.len())
                .filter_map(|row| self.table.cell(row, column))
                .collect(),
            Err(_) => Vec::new(),
        };

        CatalogSummary {
            rows: self.table.len(),
            columns: self.table.columns().to_vec(),
            missing_columns,
            described: descriptions.len(),
            with_file_range: descriptions
                .iter()
                .filter(|d| extract_file_range(d).is_some())
                .count(),
        }
    }

    /// Number of rows in the catalog
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if catalog has no rows
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
