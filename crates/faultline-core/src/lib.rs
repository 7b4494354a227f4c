//! # faultline-core
//!
//! Foundation crate for the Faultline test prioritization engine.
//! Defines identifiers, outcome records, errors, config, tracing, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::FaultlineConfig;
pub use errors::{FaultlineErrorCode, PipelineError};
pub use types::{CanonicalIds, FaultRecord, Outcome, OutcomeMap, SparseMatrix, TestId};
