use core::fmt;

/// Failures surfaced by the generation operations.
///
/// Callers can tell every terminal condition apart by variant. Row-level parse problems are not
/// here: they are recovered during loading and reported through [`crate::LoadStats::parse_error`].
#[derive(Debug)]
pub enum GenerateError {
    /// The browscap archive is missing or unreadable, or it holds no CSV entry.
    ResourceNotFound(ohno::AppError),

    /// Loading finished but not a single pattern survived normalization.
    NoDataFound,

    /// The pool has entries, but none of them contain the requested filters.
    NoMatchFound {
        browser: Option<String>,
        platform: Option<String>,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceNotFound(e) => write!(f, "unable to load browscap data: {e:#}"),
            Self::NoDataFound => f.write_str("no user agents found in browscap data"),
            Self::NoMatchFound { browser, platform } => write!(
                f,
                "no user agents found matching the specified criteria (browser: {}, platform: {})",
                browser.as_deref().unwrap_or("any"),
                platform.as_deref().unwrap_or("any"),
            ),
        }
    }
}

impl core::error::Error for GenerateError {}

/// A read or decode failure that ended row iteration early.
///
/// The rows collected before the failure are kept, so a load that records one of these
/// returns a truncated pool rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowParseError {
    /// Zero-based index of the record that could not be read.
    pub record: usize,

    /// Line in the CSV entry where the failure was detected, when the reader knows it.
    pub line: Option<u64>,

    pub message: String,
}

impl fmt::Display for RowParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "record {} (line {line}): {}", self.record, self.message),
            None => write!(f, "record {}: {}", self.record, self.message),
        }
    }
}
