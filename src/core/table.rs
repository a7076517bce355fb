use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Column holding the free-text record description
pub const DESCRIPTION_COLUMN: &str = "Description";

/// Column holding the opaque citable reference identifier
pub const CITABLE_REFERENCE_COLUMN: &str = "Citable Reference";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("missing column '{0}'")]
    MissingColumn(String),

    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// A tabular dataset of nullable text cells.
///
/// Rows keep the order in which they were read. Lookups only ever borrow the
/// table, so one instance can be shared between any number of queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

/// A borrowed view of the two columns a lookup cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceRecord<'a> {
    /// Position of the row in the source table
    pub row: usize,
    pub description: Option<&'a str>,
    pub citable_reference: Option<&'a str>,
}

impl ReferenceTable {
    /// Build a table, checking every row has one cell per column.
    ///
    /// # Errors
    ///
    /// Returns `TableError::RowWidth` for the first row whose width differs
    /// from the number of columns.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Result<Self, TableError> {
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != columns.len())
        {
            return Err(TableError::RowWidth {
                row,
                found: cells.len(),
                expected: columns.len(),
            });
        }

        Ok(Self { columns, rows })
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by exact (case-sensitive) name.
    ///
    /// # Errors
    ///
    /// Returns `TableError::MissingColumn` if no column has this name.
    pub fn column_index(&self, name: &str) -> Result<usize, TableError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))
    }

    /// Cell value, `None` when the cell is null or out of bounds
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .and_then(Option::as_deref)
    }

    /// Iterate every row as a [`ReferenceRecord`].
    ///
    /// # Errors
    ///
    /// Returns `TableError::MissingColumn` if either the `Description` or the
    /// `Citable Reference` column is absent.
    pub fn records(&self) -> Result<impl Iterator<Item = ReferenceRecord<'_>> + '_, TableError> {
        let description = self.column_index(DESCRIPTION_COLUMN)?;
        let citable_reference = self.column_index(CITABLE_REFERENCE_COLUMN)?;

        Ok((0..self.rows.len()).map(move |row| ReferenceRecord {
            row,
            description: self.cell(row, description),
            citable_reference: self.cell(row, citable_reference),
        }))
    }
}
