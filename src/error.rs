use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Load-time errors
// ---------------------------------------------------------------------------

/// Failures that prevent the dataset from being loaded at all.
///
/// These never escape [`crate::data::loader::load_or_empty`]; callers that
/// go through that boundary get an empty dataset plus the error as a warning.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Backing source is missing or unreadable.
    #[error("data unavailable at '{}': {source}", path.display())]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header row lacks a column the loader depends on.
    #[error("required column '{column}' is missing from the header")]
    MissingColumn { column: &'static str },

    /// The CSV stream itself is broken (e.g. unreadable header).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Per-row errors
// ---------------------------------------------------------------------------

/// A single row that could not be turned into an [`crate::data::model::AirportRecord`].
/// The row is skipped; the load carries on.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
}

impl RecordError {
    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        RecordError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}
