//! Pipeline errors and non-fatal diagnostic collection.

use super::{ApfdError, CatalogError, ConfigError, FaultlineErrorCode, StorageError};

/// Errors that abort a planning, reporting, or recording pass.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("APFD error: {0}")]
    Apfd(#[from] ApfdError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl FaultlineErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Catalog(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Apfd(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// A history record left out of the reward fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySkip {
    /// Storage key of the record (file name).
    pub key: String,
    pub reason: String,
}

/// Result of a pass that accumulates non-fatal diagnostics.
/// Allows the pass to complete when individual history records are unusable.
#[derive(Debug, Default)]
pub struct PipelineResult<T: Default = ()> {
    pub data: T,
    pub skipped: Vec<HistorySkip>,
}

impl<T: Default> PipelineResult<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            skipped: Vec::new(),
        }
    }

    pub fn add_skip(&mut self, skip: HistorySkip) {
        self.skipped.push(skip);
    }

    /// Returns true if nothing was skipped.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}
