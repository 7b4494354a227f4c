//! Benchmarks for alignment, history folding, and scoring.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use faultline_core::types::{CanonicalIds, FaultRecord, Outcome, OutcomeMap, SparseMatrix, TestId};
use faultline_engine::aligner::align;
use faultline_engine::{HistoryAggregator, Scorer};

const N: usize = 500;
const CYCLES: u64 = 50;

fn id(i: usize) -> String {
    format!("tc{i:04}")
}

fn dense_sparse(n: usize) -> SparseMatrix {
    let mut m = SparseMatrix::new();
    for i in 0..n {
        let row = m.entry(id(i)).or_default();
        for j in 0..n {
            if i != j {
                row.insert(id(j), ((i * 31 + j * 17) % 100) as f64 / 100.0);
            }
        }
    }
    m
}

fn history(n: usize) -> Vec<FaultRecord> {
    (1..=CYCLES)
        .map(|v| {
            let outcomes: OutcomeMap = (0..n)
                .filter(|i| (i + v as usize) % 7 == 0)
                .map(|i| (TestId::new(id(i)), Outcome::Failed))
                .collect();
            FaultRecord::new(v, outcomes)
        })
        .collect()
}

fn bench_planning(c: &mut Criterion) {
    let ids = CanonicalIds::new((0..N).map(id));
    let sparse = dense_sparse(N);
    let records = history(N);

    c.bench_function("align_500", |b| b.iter(|| align(black_box(&ids), Some(&sparse))));

    let aggregator = HistoryAggregator::default();
    c.bench_function("fold_500x50", |b| {
        b.iter(|| aggregator.fold(black_box(&ids), black_box(&records)))
    });

    let input = align(&ids, Some(&sparse));
    let output = align(&ids, None);
    let reward = aggregator.fold(&ids, &records);
    c.bench_function("prioritize_500", |b| {
        b.iter(|| Scorer::default().prioritize(black_box(&ids), &input, &output, &reward))
    });
}

criterion_group!(benches, bench_planning);
criterion_main!(benches);
