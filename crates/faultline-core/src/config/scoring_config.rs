//! Prioritization weight configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Weights of the three score terms.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight of the averaged input-space distance. Default: 0.5.
    pub alpha: Option<f64>,
    /// Weight of the averaged output-space distance. Default: 0.5.
    pub beta: Option<f64>,
    /// Weight of the historical reward. Default: 1.0.
    pub gamma: Option<f64>,
}

impl ScoringConfig {
    pub fn effective_alpha(&self) -> f64 {
        self.alpha.unwrap_or(constants::DEFAULT_ALPHA)
    }

    pub fn effective_beta(&self) -> f64 {
        self.beta.unwrap_or(constants::DEFAULT_BETA)
    }

    pub fn effective_gamma(&self) -> f64 {
        self.gamma.unwrap_or(constants::DEFAULT_GAMMA)
    }
}
