//! Error types for the exif-forensics library.

use thiserror::Error;

/// Errors that can occur while collecting or analyzing file metadata.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file does not exist
    #[error("File '{0}' not found")]
    FileNotFound(String),

    /// An external inspection tool could not be started
    #[error("Failed to launch {tool}: {source}")]
    ToolLaunch {
        /// The command that was invoked
        tool: String,
        /// The underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Extractor output held no metadata records
    #[error("Metadata output contained no records")]
    EmptyMetadata,

    /// Extractor output was valid JSON but not the expected shape
    #[error("Unexpected metadata record: {0}")]
    UnexpectedRecord(String),

    /// Invalid timestamp format
    #[error("Invalid timestamp format: {0}")]
    InvalidTimestamp(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for exif-forensics operations.
pub type Result<T> = std::result::Result<T, Error>;
