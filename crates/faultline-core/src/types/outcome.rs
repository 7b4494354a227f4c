//! Pass/fail outcomes as persisted in fault history records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::TestId;

/// Result of one test in one execution cycle. Persisted as `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Outcome {
    #[default]
    Passed,
    Failed,
}

impl Outcome {
    pub fn is_fault(self) -> bool {
        matches!(self, Outcome::Failed)
    }

    /// Numeric value used by the reward fold: 1.0 for a fault, else 0.0.
    pub fn as_f64(self) -> f64 {
        match self {
            Outcome::Passed => 0.0,
            Outcome::Failed => 1.0,
        }
    }
}

impl From<Outcome> for u8 {
    fn from(o: Outcome) -> Self {
        match o {
            Outcome::Passed => 0,
            Outcome::Failed => 1,
        }
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Outcome::Passed),
            1 => Ok(Outcome::Failed),
            other => Err(format!("outcome must be 0 or 1, got {other}")),
        }
    }
}

/// Identifier → outcome mapping for one cycle.
pub type OutcomeMap = BTreeMap<TestId, Outcome>;
