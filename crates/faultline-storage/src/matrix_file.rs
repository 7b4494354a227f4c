//! Distance matrix files (`id → (id → distance)`).

use std::path::Path;

use tracing::{debug, info};

use faultline_core::errors::StorageError;
use faultline_core::types::SparseMatrix;

use crate::json;

/// Load a sparse distance matrix.
///
/// Returns `Ok(None)` when the file does not exist: an absent matrix is a
/// supported input that degrades to zero influence. A file that exists but
/// does not parse is an error.
pub fn load_sparse(path: &Path) -> Result<Option<SparseMatrix>, StorageError> {
    if !path.is_file() {
        info!(path = %path.display(), "distance matrix absent, treating as all-zero");
        return Ok(None);
    }
    let matrix: SparseMatrix = json::read_json(path)?;
    debug!(path = %path.display(), rows = matrix.len(), "loaded distance matrix");
    Ok(Some(matrix))
}

/// Persist a sparse distance matrix (used by fixtures and tooling).
pub fn write_sparse(path: &Path, matrix: &SparseMatrix) -> Result<(), StorageError> {
    json::write_json(path, matrix)
}
