//! Matrix aligner: sparse `id → (id → f64)` to a dense canonical matrix.

use tracing::debug;

use faultline_core::types::{CanonicalIds, SparseMatrix};

/// Square row-major matrix indexed by canonical position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DenseMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl DenseMatrix {
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            cells: vec![0.0; n * n],
        }
    }

    /// Side length.
    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.n + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.cells[i * self.n + j] = value;
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }

    pub fn row_sums(&self) -> Vec<f64> {
        (0..self.n).map(|i| self.row(i).iter().sum()).collect()
    }

    /// True when every cell is within `atol` of zero.
    pub fn is_all_zero(&self, atol: f64) -> bool {
        self.cells.iter().all(|v| v.abs() <= atol)
    }
}

/// Align `sparse` to the canonical frame `ids`.
///
/// Cell `(i, j)` holds the value stored for `(ids[i], ids[j])`, or 0.0 when
/// absent. `None` yields an all-zero matrix. Entries naming identifiers
/// outside `ids` are dropped.
pub fn align(ids: &CanonicalIds, sparse: Option<&SparseMatrix>) -> DenseMatrix {
    let mut dense = DenseMatrix::zeros(ids.len());
    let Some(sparse) = sparse else {
        return dense;
    };

    let mut ignored = 0usize;
    for (row_id, cols) in sparse {
        let Some(i) = ids.index_of(row_id) else {
            ignored += cols.len();
            continue;
        };
        for (col_id, value) in cols {
            match ids.index_of(col_id) {
                Some(j) => dense.set(i, j, *value),
                None => ignored += 1,
            }
        }
    }

    if ignored > 0 {
        debug!(ignored, "matrix entries outside the canonical frame ignored");
    }
    dense
}
