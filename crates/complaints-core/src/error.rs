use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the complaint report pipeline.
#[derive(Error, Debug)]
pub enum ComplaintError {
    /// The input file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created or written.
    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input stream has no header row.
    #[error("Input has no header row")]
    MissingHeader,

    /// The header row lacks one of the required columns.
    #[error("Input header is missing required column \"{0}\"")]
    MissingColumn(String),

    /// A data row could not be parsed (wrong field count, bad encoding).
    #[error("Malformed row at line {line}: {message}")]
    MalformedRow { line: u64, message: String },

    /// A `Date received` value did not match `YYYY-MM-DD`.
    #[error("Invalid date received: {0}")]
    InvalidDate(String),

    /// A required field was empty.
    #[error("Missing value in required column \"{0}\"")]
    MissingField(&'static str),

    /// The run report could not be serialised.
    #[error("Failed to serialise run report: {0}")]
    Report(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ComplaintError {
    /// Row-level errors skip the offending row; everything else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MalformedRow { .. } | Self::InvalidDate(_) | Self::MissingField(_)
        )
    }
}

/// Convenience alias used throughout the complaint crates.
pub type Result<T> = std::result::Result<T, ComplaintError>;
