//! Sparse distance matrix as persisted on disk.

use std::collections::BTreeMap;

/// `row id → (column id → distance)`. Entries may be missing or reference
/// identifiers outside the canonical frame.
pub type SparseMatrix = BTreeMap<String, BTreeMap<String, f64>>;
