//! FaultlineErrorCode trait for operator-facing diagnostics.

/// Every error enum implements this to provide a stable, greppable code.
pub trait FaultlineErrorCode {
    /// Returns the error code string (e.g., "CATALOG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted diagnostic string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const VERSION_EXISTS: &str = "VERSION_EXISTS";
pub const EMPTY_ORDER: &str = "EMPTY_ORDER";
pub const INVALID_ORDER: &str = "INVALID_ORDER";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
