use thiserror::Error;
use tracing::debug;

use crate::core::query::{Query, QueryError, EXCLUDED_CODE};
use crate::core::table::{ReferenceTable, TableError};
use crate::matching::filter::{filter_by_file, project, MatchTable};
use crate::matching::text::{code_pattern, match_code};

/// Why a lookup produced a message instead of a table.
///
/// The `Display` text of each variant is the sentence shown to users.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupStatus {
    #[error(transparent)]
    Malformed(#[from] QueryError),

    #[error("Search for 'Code {}' is excluded.", EXCLUDED_CODE)]
    Excluded,

    /// Covers both "no description has the code" and "no matching
    /// description covers the file"
    #[error("No match found for 'Code {code}' with file {file} in the description.")]
    NoMatch { code: String, file: u64 },

    #[error("An error occurred: {0}")]
    Unexpected(String),
}

impl LookupStatus {
    /// Short machine-readable name for JSON and TSV output
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Malformed(_) => "malformed_query",
            Self::Excluded => "excluded",
            Self::NoMatch { .. } => "no_match",
            Self::Unexpected(_) => "error",
        }
    }
}

/// Failures inside the pipeline that are not the user's fault
#[derive(Error, Debug)]
enum LookupError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

/// Result of a lookup: either rows, or a status sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Matches(MatchTable),
    Status(LookupStatus),
}

impl LookupOutcome {
    #[must_use]
    pub fn matches(&self) -> Option<&MatchTable> {
        match self {
            Self::Matches(table) => Some(table),
            Self::Status(_) => None,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<&LookupStatus> {
        match self {
            Self::Matches(_) => None,
            Self::Status(status) => Some(status),
        }
    }

    /// JSON shape shared by the CLI and the web API
    #[must_use]
    pub fn to_json(&self, query: &str) -> serde_json::Value {
        match self {
            Self::Matches(matches) => serde_json::json!({
                "query": query,
                "status": "ok",
                "columns": MatchTable::COLUMNS,
                "rows": matches.rows,
            }),
            Self::Status(status) => serde_json::json!({
                "query": query,
                "status": "message",
                "kind": status.kind(),
                "message": status.to_string(),
            }),
        }
    }
}

/// Looks up citable references in a borrowed dataset
pub struct ReferenceMatcher<'a> {
    table: &'a ReferenceTable,
}

impl<'a> ReferenceMatcher<'a> {
    #[must_use]
    pub fn new(table: &'a ReferenceTable) -> Self {
        Self { table }
    }

    /// Run a lookup for a raw reference string such as `FO 371/15/12`.
    ///
    /// Never fails: malformed input, the excluded code, empty results and
    /// internal errors all come back as [`LookupOutcome::Status`].
    #[must_use]
    pub fn lookup(&self, raw: &str) -> LookupOutcome {
        let query = match Query::parse(raw) {
            Ok(query) => query,
            Err(e) => {
                debug!("Rejected query {raw:?}: {e}");
                return LookupOutcome::Status(e.into());
            }
        };

        if query.is_excluded() {
            debug!("Query {raw:?} names the excluded code");
            return LookupOutcome::Status(LookupStatus::Excluded);
        }

        match self.run(&query) {
            Ok(table) if !table.is_empty() => LookupOutcome::Matches(table),
            Ok(_) => LookupOutcome::Status(LookupStatus::NoMatch {
                code: query.code_token,
                file: query.file_number,
            }),
            Err(e) => LookupOutcome::Status(LookupStatus::Unexpected(e.to_string())),
        }
    }

    fn run(&self, query: &Query) -> Result<MatchTable, LookupError> {
        let pattern = code_pattern(&query.code_token)?;

        let candidates = match_code(self.table.records()?, &pattern);
        debug!(
            "{} of {} descriptions mention Code {}",
            candidates.len(),
            self.table.len(),
            query.code_token
        );

        let survivors = filter_by_file(candidates, query.file_number);
        debug!(
            "{} candidates cover file {}",
            survivors.len(),
            query.file_number
        );

        Ok(project(&survivors))
    }
}

/// Shorthand for `ReferenceMatcher::new(table).lookup(raw)`
#[must_use]
pub fn lookup(raw: &str, table: &ReferenceTable) -> LookupOutcome {
    ReferenceMatcher::new(table).lookup(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::{CITABLE_REFERENCE_COLUMN, DESCRIPTION_COLUMN};

    fn table(rows: &[(&str, Option<&str>)]) -> ReferenceTable {
        ReferenceTable::new(
            vec![
                CITABLE_REFERENCE_COLUMN.to_string(),
                DESCRIPTION_COLUMN.to_string(),
            ],
            rows.iter()
                .map(|(r, d)| vec![Some((*r).to_string()), d.map(str::to_string)])
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_finds_range() {
        let data = table(&[("FO 371/1", Some("Code 12, Files 10 - 20"))]);
        let outcome = lookup("FO 371/15/12", &data);

        let matches = outcome.matches().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches.rows[0].citable_reference.as_deref(), Some("FO 371/1"));
    }

    #[test]
    fn test_no_text_match_and_no_range_share_message() {
        let data = table(&[
            ("FO 371/1", Some("Code 13, File 15")),
            ("FO 371/2", Some("Code 12, general")),
        ]);

        let no_text = lookup("FO/15/14", &data);
        let no_range = lookup("FO/15/12", &data);
        assert_eq!(
            no_text.status().unwrap().to_string(),
            "No match found for 'Code 14' with file 15 in the description."
        );
        assert_eq!(
            no_range.status().unwrap().to_string(),
            "No match found for 'Code 12' with file 15 in the description."
        );
        assert_eq!(no_text.status().unwrap().kind(), "no_match");
    }

    #[test]
    fn test_excluded_before_missing_column() {
        let data = ReferenceTable::new(vec!["Other".to_string()], vec![]).unwrap();
        assert_eq!(
            lookup("FO/5/126", &data),
            LookupOutcome::Status(LookupStatus::Excluded)
        );
    }

    #[test]
    fn test_missing_column_is_unexpected() {
        let data = ReferenceTable::new(vec![DESCRIPTION_COLUMN.to_string()], vec![]).unwrap();
        let status = lookup("FO/5/12", &data).status().cloned().unwrap();
        assert_eq!(status.kind(), "error");
        assert_eq!(
            status.to_string(),
            "An error occurred: missing column 'Citable Reference'"
        );
    }

    #[test]
    fn test_malformed_is_reported() {
        let data = table(&[]);
        let status = lookup("FO 371/12", &data).status().cloned().unwrap();
        assert_eq!(status, LookupStatus::Malformed(QueryError::TooFewSeparators));
        assert_eq!(status.kind(), "malformed_query");
    }

    #[test]
    fn test_to_json_matches() {
        let data = table(&[("FO 371/1", Some("Code 12, File 15"))]);
        let json = lookup("FO 371/15/12", &data).to_json("FO 371/15/12");
        assert_eq!(json["status"], "ok");
        assert_eq!(json["columns"][0], "Citable Reference");
        assert_eq!(json["rows"][0]["Citable Reference"], "FO 371/1");
        assert_eq!(json["rows"][0]["Description"], "Code 12, File 15");
    }

    #[test]
    fn test_to_json_status() {
        let json = LookupOutcome::Status(LookupStatus::Excluded).to_json("FO/5/126");
        assert_eq!(json["status"], "message");
        assert_eq!(json["kind"], "excluded");
        assert_eq!(json["message"], "Search for 'Code 126' is excluded.");
        assert!(json.get("rows").is_none());
    }

    #[test]
    fn test_excluded_message() {
        assert_eq!(
            LookupStatus::Excluded.to_string(),
            "Search for 'Code 126' is excluded."
        );
    }
}
