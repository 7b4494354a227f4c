//! Error handling for Faultline.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod apfd_error;
pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod pipeline_error;
pub mod storage_error;

pub use apfd_error::ApfdError;
pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::FaultlineErrorCode;
pub use pipeline_error::{HistorySkip, PipelineError, PipelineResult};
pub use storage_error::StorageError;
