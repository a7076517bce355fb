use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// "Files 10 - 20"
    static ref FILES_RANGE: Regex =
        Regex::new(r"Files\s+([0-9]+)\s*-\s*([0-9]+)").expect("FILES_RANGE regex is valid");

    /// "File 15"
    static ref FILE_SINGLE: Regex =
        Regex::new(r"File\s+([0-9]+)").expect("FILE_SINGLE regex is valid");
}

/// Closed interval of file numbers described by one record.
///
/// Bounds are kept exactly as written in the description. A range written
/// high-to-low (`Files 20 - 10`) is not swapped and contains no file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileRange {
    pub low: u64,
    pub high: u64,
}

impl FileRange {
    #[must_use]
    pub fn new(low: u64, high: u64) -> Self {
        Self { low, high }
    }

    #[must_use]
    pub fn single(file: u64) -> Self {
        Self {
            low: file,
            high: file,
        }
    }

    /// Inclusive at both ends
    #[must_use]
    pub fn contains(&self, file: u64) -> bool {
        self.low <= file && file <= self.high
    }
}

impl std::fmt::Display for FileRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.low == self.high {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}-{}", self.low, self.high)
        }
    }
}

/// Extract the file range mentioned in a description.
///
/// A `Files <a> - <b>` range wins over a single `File <n>` mention; only the
/// first matching form is considered. Returns `None` when neither form is
/// present, or when the digits of the form that matched overflow a `u64`.
#[must_use]
pub fn extract_file_range(description: &str) -> Option<FileRange> {
    if let Some(caps) = FILES_RANGE.captures(description) {
        let low = caps[1].parse().ok()?;
        let high = caps[2].parse().ok()?;
        return Some(FileRange::new(low, high));
    }

    let caps = FILE_SINGLE.captures(description)?;
    caps[1].parse().ok().map(FileRange::single)
}
