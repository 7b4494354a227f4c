//! Prioritization scorer.
//!
//! ```text
//! avg_input[i]  = sum_j input[i][j]  / max(n - 1, 1)
//! avg_output[i] = sum_j output[i][j] / max(n - 1, 1)
//! score[i] = alpha * avg_input[i] + beta * avg_output[i] + gamma * reward[i]
//! ```
//!
//! Tests run in descending score; exact ties run in ascending identifier
//! order. The order is a pure function of the inputs.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use faultline_core::config::ScoringConfig;
use faultline_core::constants::ZERO_MATRIX_ATOL;
use faultline_core::types::{CanonicalIds, TestId};

use crate::aligner::DenseMatrix;
use crate::history::RewardVector;

/// Non-negative weights of the three score terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::from(&ScoringConfig::default())
    }
}

impl From<&ScoringConfig> for ScoringWeights {
    fn from(config: &ScoringConfig) -> Self {
        Self {
            alpha: config.effective_alpha(),
            beta: config.effective_beta(),
            gamma: config.effective_gamma(),
        }
    }
}

/// Score of one test with the terms it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTest {
    pub id: TestId,
    pub score: f64,
    pub avg_input: f64,
    pub avg_output: f64,
    pub reward: f64,
    /// 1-indexed position in the execution order.
    pub rank: usize,
}

/// Execution order plus per-test diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prioritization {
    /// Tests in run order.
    pub order: Vec<TestId>,
    /// Scores in canonical order.
    pub scores: Vec<ScoredTest>,
}

impl Prioritization {
    /// The first `k` tests of the order with their scores.
    pub fn top(&self, k: usize) -> Vec<&ScoredTest> {
        let mut ranked: Vec<&ScoredTest> = self.scores.iter().collect();
        ranked.sort_by_key(|s| s.rank);
        ranked.truncate(k);
        ranked
    }

    pub fn score_of(&self, id: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.id.as_str() == id)
            .map(|s| s.score)
    }
}

/// Combines aligned distance matrices and the reward vector into an order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Score and rank every test in `ids`.
    ///
    /// # Panics
    /// If a matrix or the reward vector is not sized to `ids`.
    pub fn prioritize(
        &self,
        ids: &CanonicalIds,
        input: &DenseMatrix,
        output: &DenseMatrix,
        reward: &RewardVector,
    ) -> Prioritization {
        let n = ids.len();
        assert_eq!(input.dim(), n, "input matrix not aligned to canonical ids");
        assert_eq!(output.dim(), n, "output matrix not aligned to canonical ids");
        assert_eq!(reward.len(), n, "reward vector not aligned to canonical ids");

        let denom = n.saturating_sub(1).max(1) as f64;
        let avg_input: Vec<f64> = input.row_sums().into_iter().map(|s| s / denom).collect();

        // Missing output evidence contributes nothing, not a uniform offset.
        let avg_output: Vec<f64> = if output.is_all_zero(ZERO_MATRIX_ATOL) {
            debug!("output-space matrix is all-zero, dropping its term");
            vec![0.0; n]
        } else {
            output.row_sums().into_iter().map(|s| s / denom).collect()
        };

        let ScoringWeights { alpha, beta, gamma } = self.weights;
        let mut scores: Vec<ScoredTest> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let r = reward.get(i);
                ScoredTest {
                    id: id.clone(),
                    score: alpha * avg_input[i] + beta * avg_output[i] + gamma * r,
                    avg_input: avg_input[i],
                    avg_output: avg_output[i],
                    reward: r,
                    rank: 0,
                }
            })
            .collect();

        let mut ranking: Vec<usize> = (0..n).collect();
        ranking.sort_by(|&a, &b| rank_cmp(&scores[a], &scores[b]));

        let mut order = Vec::with_capacity(n);
        for (pos, &i) in ranking.iter().enumerate() {
            scores[i].rank = pos + 1;
            order.push(scores[i].id.clone());
        }

        Prioritization { order, scores }
    }
}

/// Descending score, then ascending identifier.
fn rank_cmp(a: &ScoredTest, b: &ScoredTest) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.id.cmp(&b.id))
}
