//! JSON file operations with schema validation
//!
//! Provides functions to read and write JSON files with serde validation.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{PostflowError, Result};
use crate::schemas::PostDraft;

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file is not valid JSON or does not match the type
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PostflowError::FileNotFound(path.display().to_string())
        } else {
            PostflowError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        PostflowError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Write a value to a JSON file with pretty formatting.
///
/// Uses atomic write (write to temp file, then rename) to avoid partial writes.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content =
        serde_json::to_string_pretty(data).map_err(|e| PostflowError::InvalidJson(e.to_string()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;
    tracing::debug!(path = %path.display(), "wrote json");

    Ok(())
}

/// Read a post draft from a JSON file
pub fn read_draft(path: &Path) -> Result<PostDraft> {
    read_json(path)
}

/// Write a post draft to a JSON file
pub fn write_draft(path: &Path, draft: &PostDraft) -> Result<()> {
    write_json(path, draft)
}
