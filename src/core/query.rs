use serde::Serialize;
use thiserror::Error;

/// Separator between the segments of a reference string
pub const SEPARATOR: char = '/';

/// Code token that is never searched for
pub const EXCLUDED_CODE: &str = "126";

/// Reasons a raw reference string cannot be turned into a [`Query`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Error: The text string must contain at least two '/'.")]
    TooFewSeparators,

    #[error("Error: The text after the last '/' is not a digit.")]
    CodeNotDigits,

    #[error("Error: The text between the first and second '/' is not a digit.")]
    FileNotDigits,

    #[error("Error: The text between the first and second '/' is too large to be a file number.")]
    FileTooLarge,
}

/// A validated lookup query.
///
/// For `FO 371/15/12` the code token is `12` (after the last `/`) and the file
/// number is `15` (between the first and second `/`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    /// Digits after the last separator, kept as text so `012` stays `012`
    pub code_token: String,
    /// Number between the first and second separator
    pub file_number: u64,
}

impl Query {
    /// Decompose a raw reference string.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] when the string has fewer than two separators,
    /// the last segment is not all digits, or the second segment is not all
    /// digits or does not fit in a `u64`.
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let parts: Vec<&str> = raw.split(SEPARATOR).collect();
        if parts.len() < 3 {
            return Err(QueryError::TooFewSeparators);
        }

        let code_token = parts[parts.len() - 1];
        if !is_digits(code_token) {
            return Err(QueryError::CodeNotDigits);
        }

        let file_segment = parts[1];
        if !is_digits(file_segment) {
            return Err(QueryError::FileNotDigits);
        }
        let file_number = file_segment
            .parse::<u64>()
            .map_err(|_| QueryError::FileTooLarge)?;

        Ok(Self {
            code_token: code_token.to_string(),
            file_number,
        })
    }

    /// Whether this query names the excluded code
    #[must_use]
    pub fn is_excluded(&self) -> bool {
        self.code_token == EXCLUDED_CODE
    }
}

/// Non-empty and ASCII digits only
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
