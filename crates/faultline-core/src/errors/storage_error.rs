//! Errors reading or writing persisted artifacts.

use super::error_code::{self, FaultlineErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error at {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed artifact {path}: {message}")]
    Parse { path: String, message: String },

    #[error("History record version {version} already exists at {path}")]
    VersionExists { version: u64, path: String },
}

impl StorageError {
    pub fn io(path: &std::path::Path, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub fn parse(path: &std::path::Path, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl FaultlineErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::VersionExists { .. } => error_code::VERSION_EXISTS,
            _ => error_code::STORAGE_ERROR,
        }
    }
}
