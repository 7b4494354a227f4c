//! APFD computation errors.

use super::error_code::{self, FaultlineErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ApfdError {
    /// `n == 0`: APFD divides by the order length.
    #[error("APFD is undefined for an empty execution order")]
    EmptyOrder,

    #[error("Execution order lists {id} more than once")]
    DuplicateIdentifier { id: String },

    #[error("Test {id} failed but does not appear in the execution order")]
    FaultNotInOrder { id: String },
}

impl FaultlineErrorCode for ApfdError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyOrder => error_code::EMPTY_ORDER,
            Self::DuplicateIdentifier { .. } | Self::FaultNotInOrder { .. } => {
                error_code::INVALID_ORDER
            }
        }
    }
}
