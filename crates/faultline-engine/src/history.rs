//! Fault history aggregator: folds versioned pass/fail records into a
//! per-test reward via exponential smoothing.
//!
//! ```text
//! r = [0.5; n]
//! for record in records (ascending version):
//!     r = decay * r + (1 - decay) * fails(record)
//! ```
//!
//! With no records at all the reward is all-zero, which the scorer reads as
//! "no information yet" rather than "historically reliable".

use serde::{Deserialize, Serialize};
use tracing::debug;

use faultline_core::constants::{DEFAULT_DECAY, NEUTRAL_REWARD_PRIOR};
use faultline_core::types::{CanonicalIds, FaultRecord};

/// One smoothed fault likelihood per canonical identifier, each in [0, 1].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RewardVector(Vec<f64>);

impl RewardVector {
    pub fn zeros(n: usize) -> Self {
        Self(vec![0.0; n])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, i: usize) -> f64 {
        self.0[i]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// EMA fold over fault history.
#[derive(Debug, Clone, Copy)]
pub struct HistoryAggregator {
    /// Weight kept from the previous value at each step, in (0, 1).
    decay: f64,
}

impl HistoryAggregator {
    /// Create an aggregator. `decay` must lie in (0, 1); config validation
    /// enforces this before a pass starts.
    pub fn new(decay: f64) -> Self {
        debug_assert!(decay > 0.0 && decay < 1.0, "decay out of range: {decay}");
        Self { decay }
    }

    pub fn decay(&self) -> f64 {
        self.decay
    }

    /// Fold `records` into a reward vector aligned to `ids`.
    ///
    /// Records are applied in ascending version order whatever order they
    /// arrive in. Identifiers absent from a record count as passed there.
    pub fn fold(&self, ids: &CanonicalIds, records: &[FaultRecord]) -> RewardVector {
        if records.is_empty() {
            debug!("no fault history, reward is all-zero");
            return RewardVector::zeros(ids.len());
        }

        let mut ordered: Vec<&FaultRecord> = records.iter().collect();
        ordered.sort_by_key(|r| r.version);

        let keep = self.decay;
        let blend = 1.0 - self.decay;
        let mut reward = vec![NEUTRAL_REWARD_PRIOR; ids.len()];
        for record in ordered {
            for (r, id) in reward.iter_mut().zip(ids.iter()) {
                let v = record.outcome_of(id.as_str()).as_f64();
                // Clamp absorbs rounding at the bounds.
                *r = (keep * *r + blend * v).clamp(0.0, 1.0);
            }
        }

        debug!(records = records.len(), decay = self.decay, "fault history folded");
        RewardVector(reward)
    }
}

impl Default for HistoryAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_DECAY)
    }
}
