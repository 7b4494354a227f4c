//! Fault history smoothing configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HistoryConfig {
    /// EMA decay in (0, 1). Default: 0.7.
    pub decay: Option<f64>,
}

impl HistoryConfig {
    pub fn effective_decay(&self) -> f64 {
        self.decay.unwrap_or(constants::DEFAULT_DECAY)
    }
}
