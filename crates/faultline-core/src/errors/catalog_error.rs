//! Test catalog errors. Any of these aborts the planning pass.

use super::error_code::{self, FaultlineErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog not found: {path}")]
    NotFound { path: String },

    #[error("Catalog parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Catalog {path} is not a mapping of test identifiers")]
    NotAMapping { path: String },

    #[error("Catalog entry {id} is not an object")]
    EntryNotObject { id: String },

    #[error("Catalog entry {id} is missing required field `{field}`")]
    MissingField { id: String, field: &'static str },

    #[error("Catalog entry {id} has an invalid `{field}`: {message}")]
    InvalidField {
        id: String,
        field: &'static str,
        message: String,
    },
}

impl FaultlineErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
