//! Priority order artifact: a JSON array of test identifiers.
//!
//! Overwritten on every planning pass. This is the only artifact the
//! execution collaborator reads to decide run order.

use std::path::Path;

use tracing::info;

use faultline_core::errors::StorageError;
use faultline_core::types::TestId;

use crate::json;

pub fn write_order(path: &Path, order: &[TestId]) -> Result<(), StorageError> {
    json::write_json(path, &order)?;
    info!(path = %path.display(), tests = order.len(), "priority order written");
    Ok(())
}

pub fn read_order(path: &Path) -> Result<Vec<TestId>, StorageError> {
    json::read_json(path)
}
