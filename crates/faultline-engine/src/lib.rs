//! # faultline-engine
//!
//! Orders a fixed set of test cases for early fault detection and scores
//! how well an executed order did.
//!
//! Planning pass: [`aligner`] → [`history`] → [`scorer`].
//! Reporting pass: [`apfd`].
//! [`pipeline`] wires both to the persisted artifacts.

pub mod aligner;
pub mod apfd;
pub mod history;
pub mod pipeline;
pub mod scorer;

pub use aligner::DenseMatrix;
pub use apfd::ApfdReport;
pub use history::{HistoryAggregator, RewardVector};
pub use pipeline::PlanOutcome;
pub use scorer::{Prioritization, ScoredTest, Scorer, ScoringWeights};
