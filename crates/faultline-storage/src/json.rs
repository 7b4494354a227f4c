//! Shared JSON file helpers.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use faultline_core::errors::StorageError;

/// Read and deserialize a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let content = std::fs::read_to_string(path).map_err(|e| StorageError::io(path, &e))?;
    serde_json::from_str(&content).map_err(|e| StorageError::parse(path, e))
}

fn render<T: Serialize>(path: &Path, value: &T) -> Result<Vec<u8>, StorageError> {
    let mut bytes = serde_json::to_vec_pretty(value).map_err(|e| StorageError::parse(path, e))?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write `value` as pretty JSON, replacing any existing file.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, &e))?;
    }
    let bytes = render(path, value)?;
    std::fs::write(path, bytes).map_err(|e| StorageError::io(path, &e))
}

/// Write `value` as pretty JSON to a file that must not exist yet.
///
/// Returns `Ok(false)` without touching the file if it already exists.
pub fn write_json_new<T: Serialize>(path: &Path, value: &T) -> Result<bool, StorageError> {
    let bytes = render(path, value)?;
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(StorageError::io(path, &e)),
    };
    file.write_all(&bytes).map_err(|e| StorageError::io(path, &e))?;
    Ok(true)
}
