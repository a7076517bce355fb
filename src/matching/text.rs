use regex::Regex;

use crate::core::table::ReferenceRecord;

/// Build the pattern for `Code <token>` ending at a word boundary.
///
/// The trailing boundary keeps `Code 12` from matching `Code 120` or
/// `Code 126`.
///
/// # Errors
///
/// Returns a `regex::Error` if the pattern cannot be compiled.
pub fn code_pattern(code_token: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"Code {}\b", regex::escape(code_token)))
}

/// Keep records whose description contains the code pattern.
///
/// Matching is case-sensitive. Records without a description never match.
/// Source order is preserved.
pub fn match_code<'a, I>(records: I, pattern: &Regex) -> Vec<ReferenceRecord<'a>>
where
    I: IntoIterator<Item = ReferenceRecord<'a>>,
{
    records
        .into_iter()
        .filter(|r| r.description.is_some_and(|d| pattern.is_match(d)))
        .collect()
}
