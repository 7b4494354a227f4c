//! Average Percentage of Faults Detected.
//!
//! For an order of `n` tests where `m` fail at 1-indexed positions `TF`:
//!
//! ```text
//! APFD = 1 - sum(TF) / (n * m) + 1 / (2n)
//! ```
//!
//! A cycle with no faults scores exactly 1.0. The optimal and random-baseline
//! figures are reporting fields only; nothing feeds them back into ordering.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use faultline_core::errors::ApfdError;
use faultline_core::types::{OutcomeMap, TestId};

/// Cycle-scoped APFD value plus diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApfdReport {
    pub apfd: f64,
    /// `n`: tests in the execution order.
    pub test_count: usize,
    /// `m`: tests that failed.
    pub fault_count: usize,
    pub first_fault_position: Option<usize>,
    pub mean_fault_position: Option<f64>,
    /// APFD had the faults occupied positions `1..=m`.
    pub optimal_apfd: f64,
    /// Expected APFD of a random order, `0.5 + 1 / (2n)`.
    pub random_apfd: f64,
    /// Sorted 1-indexed fault positions.
    pub fault_positions: Vec<usize>,
}

/// `0.5 + 1 / (2n)`. Requires `n >= 1`.
pub fn random_baseline(n: usize) -> f64 {
    0.5 + 1.0 / (2.0 * n as f64)
}

/// APFD for fault positions in an order of length `n >= 1`.
pub fn apfd_for_positions(n: usize, positions: &[usize]) -> f64 {
    if positions.is_empty() {
        return 1.0;
    }
    let n = n as f64;
    let m = positions.len() as f64;
    let sum: f64 = positions.iter().map(|&p| p as f64).sum();
    1.0 - sum / (n * m) + 1.0 / (2.0 * n)
}

/// Compute the APFD report for `order` given the cycle's `outcomes`.
///
/// Tests in `order` without an outcome count as passed. Errors on an empty
/// order, a repeated identifier, or a failed test missing from `order`.
pub fn compute(order: &[TestId], outcomes: &OutcomeMap) -> Result<ApfdReport, ApfdError> {
    let n = order.len();
    if n == 0 {
        return Err(ApfdError::EmptyOrder);
    }

    let mut position: BTreeMap<&str, usize> = BTreeMap::new();
    for (i, id) in order.iter().enumerate() {
        if position.insert(id.as_str(), i + 1).is_some() {
            return Err(ApfdError::DuplicateIdentifier { id: id.to_string() });
        }
    }

    let mut fault_positions = Vec::new();
    for (id, outcome) in outcomes {
        if !outcome.is_fault() {
            continue;
        }
        match position.get(id.as_str()) {
            Some(&p) => fault_positions.push(p),
            None => return Err(ApfdError::FaultNotInOrder { id: id.to_string() }),
        }
    }
    fault_positions.sort_unstable();

    let m = fault_positions.len();
    let apfd = apfd_for_positions(n, &fault_positions);
    let optimal: Vec<usize> = (1..=m).collect();
    let optimal_apfd = apfd_for_positions(n, &optimal);
    debug_assert!(
        (-1e-12..=1.0 + 1e-12).contains(&apfd),
        "APFD out of range: {apfd}"
    );

    let mean_fault_position = (m > 0)
        .then(|| fault_positions.iter().sum::<usize>() as f64 / m as f64);

    Ok(ApfdReport {
        apfd,
        test_count: n,
        fault_count: m,
        first_fault_position: fault_positions.first().copied(),
        mean_fault_position,
        optimal_apfd,
        random_apfd: random_baseline(n),
        fault_positions,
    })
}
