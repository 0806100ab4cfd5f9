//! Error types for fileutil operations
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

/// Result type alias for fileutil operations
pub type Result<T> = std::result::Result<T, FileUtilError>;

/// Main error type for all fileutil operations
#[derive(Debug, Error)]
pub enum FileUtilError {
    /// Value could not be converted to JSON
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Target file could not be created, truncated, or written
    #[error("Write failed: {0}")]
    FileWrite(String),

    /// File could not be opened or read
    #[error("Read failed: {0}")]
    FileRead(String),

    /// File content is not valid JSON for the requested type
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
}

impl FileUtilError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            FileUtilError::Serialization(_) => "SERIALIZATION",
            FileUtilError::FileWrite(_) => "FILE_WRITE",
            FileUtilError::FileRead(_) => "FILE_READ",
            FileUtilError::InvalidJson(_) => "INVALID_JSON",
        }
    }
}
