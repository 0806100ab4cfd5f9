//! JSON file operations
//!
//! Provides functions to write and read values as pretty-printed JSON.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{FileUtilError, Result};

/// Serialize a value and write it to a JSON file with pretty formatting.
///
/// Creates the file if absent and truncates it if present. The write is
/// direct, not write-to-temp-then-rename, so a crash mid-write can leave
/// a partial file behind. The parent directory must already exist.
///
/// Field inclusion and naming follow the serde attributes on `T`:
/// `#[serde(skip)]` fields are omitted entirely and `#[serde(rename)]`
/// overrides the field name in the output. `None` serializes as the bare
/// text `null`, a plain string as a quoted literal.
///
/// # Arguments
/// * `value` - The value to serialize
/// * `path` - Path to the JSON file
///
/// # Errors
/// * `Serialization` - If the value cannot be converted to JSON
/// * `FileWrite` - If the file cannot be created or written
pub fn save_to_file<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(value)
        .map_err(|e| FileUtilError::Serialization(e.to_string()))?;

    tracing::debug!("writing {} bytes to {}", content.len(), path.display());

    fs::write(path, content)
        .map_err(|e| FileUtilError::FileWrite(format!("Cannot write {}: {}", path.display(), e)))
}

/// Read and deserialize a JSON file.
///
/// Counterpart to [`save_to_file`] for callers reading the files this
/// module writes.
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Errors
/// * `FileRead` - If the file cannot be opened or read
/// * `InvalidJson` - If the content does not parse as `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .map_err(|e| FileUtilError::FileRead(format!("Cannot read {}: {}", path.display(), e)))?;

    serde_json::from_str(&content).map_err(|e| {
        FileUtilError::InvalidJson(format!("Invalid JSON in {}: {}", path.display(), e))
    })
}
