//! Planning, reporting, and recording passes over the persisted artifacts.
//!
//! Every pass is a synchronous batch computation. Passes must not overlap:
//! see `faultline_storage::history_dir` for the version-counter hazard.

use std::path::{Path, PathBuf};

use tracing::{info, info_span, warn};

use faultline_core::constants::TOP_K_DIAGNOSTICS;
use faultline_core::errors::{PipelineError, PipelineResult};
use faultline_core::types::{CanonicalIds, FaultRecord, OutcomeMap, TestId};
use faultline_core::FaultlineConfig;
use faultline_storage::{catalog, history_dir, matrix_file, order_file};

use crate::aligner;
use crate::apfd::{self, ApfdReport};
use crate::history::{HistoryAggregator, RewardVector};
use crate::scorer::{Prioritization, Scorer, ScoringWeights};

/// Everything a planning pass produced.
#[derive(Debug, Clone, Default)]
pub struct PlanOutcome {
    pub ids: CanonicalIds,
    pub reward: RewardVector,
    pub prioritization: Prioritization,
    /// Where the execution order was written.
    pub order_path: PathBuf,
}

/// Run a planning pass for the project at `root`.
///
/// Loads and validates the catalog (any catalog error aborts before an
/// order is written), aligns both distance matrices, folds the fault
/// history, scores, and overwrites the priority order artifact. Skipped
/// history records are returned as non-fatal diagnostics.
pub fn plan(
    root: &Path,
    config: &FaultlineConfig,
) -> Result<PipelineResult<PlanOutcome>, PipelineError> {
    let _span = info_span!("faultline.plan", root = %root.display()).entered();
    FaultlineConfig::validate(config)?;
    let paths = &config.paths;

    let catalog = catalog::load_catalog(&paths.catalog(root))?;
    let ids = catalog.canonical_ids();

    let missing = catalog.missing_scripts(&paths.scripts_dir(root));
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(TestId::as_str).collect();
        warn!(missing = %names.join(", "), "test cases without a script");
    }

    let input_sparse = matrix_file::load_sparse(&paths.input_matrix(root))?;
    let output_sparse = matrix_file::load_sparse(&paths.output_matrix(root))?;
    let input = aligner::align(&ids, input_sparse.as_ref());
    let output = aligner::align(&ids, output_sparse.as_ref());

    let history = history_dir::load_history(&paths.fault_dir(root))?;
    let reward = HistoryAggregator::new(config.history.effective_decay()).fold(&ids, &history.data);

    let scorer = Scorer::new(ScoringWeights::from(&config.scoring));
    let prioritization = scorer.prioritize(&ids, &input, &output, &reward);

    let order_path = paths.order(root);
    order_file::write_order(&order_path, &prioritization.order)?;

    let top: Vec<String> = prioritization
        .top(TOP_K_DIAGNOSTICS)
        .iter()
        .map(|s| format!("{}={:.4}", s.id, s.score))
        .collect();
    info!(
        tests = ids.len(),
        history_records = history.data.len(),
        skipped_records = history.skipped.len(),
        top = %top.join(", "),
        "planning pass complete"
    );

    let mut result = PipelineResult::new(PlanOutcome {
        ids,
        reward,
        prioritization,
        order_path,
    });
    for skip in history.skipped {
        result.add_skip(skip);
    }
    Ok(result)
}

/// Score an executed order against the outcomes it produced.
pub fn report(order: &[TestId], outcomes: &OutcomeMap) -> Result<ApfdReport, PipelineError> {
    let report = apfd::compute(order, outcomes)?;
    info!(
        apfd = report.apfd,
        tests = report.test_count,
        faults = report.fault_count,
        first_fault = ?report.first_fault_position,
        optimal = report.optimal_apfd,
        random = report.random_apfd,
        "APFD report"
    );
    Ok(report)
}

/// Persist a finished cycle's outcomes as the next history record.
pub fn record_cycle(
    root: &Path,
    config: &FaultlineConfig,
    outcomes: OutcomeMap,
) -> Result<FaultRecord, PipelineError> {
    Ok(history_dir::append_record(&config.paths.fault_dir(root), outcomes)?)
}

/// Read back the order written by the last planning pass.
pub fn load_order(root: &Path, config: &FaultlineConfig) -> Result<Vec<TestId>, PipelineError> {
    Ok(order_file::read_order(&config.paths.order(root))?)
}
