//! Empty-file seeding and existence checks.

use std::fs;
use std::path::Path;

use crate::errors::{FileUtilError, Result};

/// Ensure a zero-byte file exists at `path`, truncating any existing content.
///
/// # Errors
/// * `FileWrite` - If the parent directory is missing or permissions are
///   insufficient
pub fn create_empty_file(path: &Path) -> Result<()> {
    fs::File::create(path)
        .map_err(|e| FileUtilError::FileWrite(format!("Cannot create {}: {}", path.display(), e)))?;
    Ok(())
}

/// Create or overwrite the file at `path` with the literal content `[]`.
///
/// Seeds files that collaborators later read back as JSON lists.
///
/// # Errors
/// * `FileWrite` - Same conditions as [`create_empty_file`]
pub fn create_empty_list_file(path: &Path) -> Result<()> {
    fs::write(path, "[]")
        .map_err(|e| FileUtilError::FileWrite(format!("Cannot create {}: {}", path.display(), e)))
}

/// Return whether a filesystem entry (file, directory, or other) exists
/// at `path`.
///
/// Only positively confirmed presence counts: any failure to stat the
/// path, including permission denied, yields `false`.
pub fn exists(path: &Path) -> bool {
    path.exists()
}
