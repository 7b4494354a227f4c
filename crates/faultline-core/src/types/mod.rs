//! Identifier, outcome, matrix, and history record types.

pub mod identifiers;
pub mod matrix;
pub mod outcome;
pub mod record;

pub use identifiers::{CanonicalIds, TestId};
pub use matrix::SparseMatrix;
pub use outcome::{Outcome, OutcomeMap};
pub use record::FaultRecord;
