//! Test identifiers and the canonical reference frame.
//!
//! Every matrix, vector, and order in the engine is indexed by the position
//! of a `TestId` inside a `CanonicalIds`. The canonical order is the
//! lexicographic order of the identifiers, never insertion or hash order.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, stable key of a test case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestId(String);

impl TestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TestId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TestId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for TestId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Sorted, de-duplicated identifier sequence with positional lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalIds {
    ids: Vec<TestId>,
    index: BTreeMap<TestId, usize>,
}

impl CanonicalIds {
    pub fn new<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TestId>,
    {
        let mut ids: Vec<TestId> = ids.into_iter().map(Into::into).collect();
        ids.sort();
        ids.dedup();
        let index = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();
        Self { ids, index }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Position of `id` in the canonical frame, if it belongs to it.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, i: usize) -> Option<&TestId> {
        self.ids.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestId> {
        self.ids.iter()
    }

    pub fn as_slice(&self) -> &[TestId] {
        &self.ids
    }
}

impl<'a> IntoIterator for &'a CanonicalIds {
    type Item = &'a TestId;
    type IntoIter = std::slice::Iter<'a, TestId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_and_dedups() {
        let ids = CanonicalIds::new(["tc3", "tc1", "tc2", "tc1"]);
        let names: Vec<&str> = ids.iter().map(TestId::as_str).collect();
        assert_eq!(names, vec!["tc1", "tc2", "tc3"]);
        assert_eq!(ids.index_of("tc2"), Some(1));
        assert_eq!(ids.index_of("tc9"), None);
    }

    #[test]
    fn lexicographic_not_numeric() {
        let ids = CanonicalIds::new(["tc10", "tc2", "tc1"]);
        let names: Vec<&str> = ids.iter().map(TestId::as_str).collect();
        assert_eq!(names, vec!["tc1", "tc10", "tc2"]);
    }
}
