//! Versioned, write-once fault history records.

use serde::{Deserialize, Serialize};

use super::{Outcome, OutcomeMap};

/// Outcomes of one completed execution cycle.
///
/// The version orders records chronologically. Only `outcomes` is persisted;
/// the version lives in the storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultRecord {
    pub version: u64,
    pub outcomes: OutcomeMap,
}

impl FaultRecord {
    pub fn new(version: u64, outcomes: OutcomeMap) -> Self {
        Self { version, outcomes }
    }

    /// Outcome of `id`. Identifiers absent from the record count as passed.
    pub fn outcome_of(&self, id: &str) -> Outcome {
        self.outcomes.get(id).copied().unwrap_or_default()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.values().filter(|o| o.is_fault()).count()
    }
}
