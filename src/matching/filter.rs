use serde::Serialize;

use crate::core::range::{extract_file_range, FileRange};
use crate::core::table::{ReferenceRecord, CITABLE_REFERENCE_COLUMN, DESCRIPTION_COLUMN};

/// Keep candidates whose described file range contains `file_number`.
///
/// Ranges are computed into a local side vector aligned with `candidates` and
/// dropped when this returns. Candidates without a detectable range are
/// removed rather than treated as matching every file.
#[must_use]
pub fn filter_by_file<'a>(
    candidates: Vec<ReferenceRecord<'a>>,
    file_number: u64,
) -> Vec<ReferenceRecord<'a>> {
    let ranges: Vec<Option<FileRange>> = candidates
        .iter()
        .map(|r| r.description.and_then(extract_file_range))
        .collect();

    candidates
        .into_iter()
        .zip(ranges)
        .filter_map(|(record, range)| match range {
            Some(range) if range.contains(file_number) => Some(record),
            _ => None,
        })
        .collect()
}

/// One row of a lookup result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedReference {
    #[serde(rename = "Citable Reference")]
    pub citable_reference: Option<String>,

    #[serde(rename = "Description")]
    pub description: String,
}

/// Lookup result projected to the citable reference and description columns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchTable {
    pub rows: Vec<MatchedReference>,
}

impl MatchTable {
    pub const COLUMNS: [&'static str; 2] = [CITABLE_REFERENCE_COLUMN, DESCRIPTION_COLUMN];

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Project surviving records onto the two output columns, keeping order
#[must_use]
pub fn project(records: &[ReferenceRecord<'_>]) -> MatchTable {
    MatchTable {
        rows: records
            .iter()
            .map(|r| MatchedReference {
                citable_reference: r.citable_reference.map(str::to_string),
                description: r.description.unwrap_or_default().to_string(),
            })
            .collect(),
    }
}
