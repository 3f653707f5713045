//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur while loading the movie CSV.
///
/// `FileNotFound` is kept apart from the generic I/O case because the
/// binary treats a missing dataset as a fatal, user-facing condition.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader rejected the input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// A row could not be decoded into a movie record
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: u64, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
