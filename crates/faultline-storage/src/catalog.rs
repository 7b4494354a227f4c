//! Canonical test catalog: `test id → {input, output, script}`.
//!
//! The catalog's sorted key set defines the canonical identifier frame.
//! A malformed catalog aborts the planning pass; the error names the first
//! offending entry in canonical order.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use faultline_core::errors::CatalogError;
use faultline_core::types::{CanonicalIds, TestId};

/// One catalog entry. `input`/`output` are domain-specific and opaque here.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub input: Value,
    pub output: Value,
    pub script: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestCatalog {
    cases: BTreeMap<TestId, TestCase>,
}

impl TestCatalog {
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&TestCase> {
        self.cases.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TestId, &TestCase)> {
        self.cases.iter()
    }

    /// The sorted identifier frame every matrix and vector aligns to.
    pub fn canonical_ids(&self) -> CanonicalIds {
        CanonicalIds::new(self.cases.keys().cloned())
    }

    /// Script for `id`: the declared one, else `<id>.py` by convention.
    pub fn script_path(&self, id: &str, scripts_dir: &Path) -> Option<PathBuf> {
        let case = self.cases.get(id)?;
        let name = match &case.script {
            Some(script) => script.clone(),
            None => format!("{id}.py"),
        };
        Some(scripts_dir.join(name))
    }

    /// Identifiers whose script file does not exist under `scripts_dir`.
    pub fn missing_scripts(&self, scripts_dir: &Path) -> Vec<TestId> {
        self.cases
            .keys()
            .filter(|id| {
                self.script_path(id.as_str(), scripts_dir)
                    .map_or(true, |p| !p.is_file())
            })
            .cloned()
            .collect()
    }

    /// Validate a parsed JSON document and build the catalog.
    pub fn from_value(value: Value, origin: &str) -> Result<Self, CatalogError> {
        let Value::Object(entries) = value else {
            return Err(CatalogError::NotAMapping {
                path: origin.to_string(),
            });
        };

        // Map iteration order depends on serde_json features.
        let mut sorted: Vec<(String, Value)> = entries.into_iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));

        let mut cases = BTreeMap::new();
        for (id, entry) in sorted {
            let Value::Object(mut fields) = entry else {
                return Err(CatalogError::EntryNotObject { id });
            };
            let input = fields
                .remove("input")
                .ok_or_else(|| CatalogError::MissingField {
                    id: id.clone(),
                    field: "input",
                })?;
            let output = fields
                .remove("output")
                .ok_or_else(|| CatalogError::MissingField {
                    id: id.clone(),
                    field: "output",
                })?;
            let script = match fields.remove("script") {
                None | Some(Value::Null) => None,
                Some(Value::String(s)) => Some(s),
                Some(other) => {
                    return Err(CatalogError::InvalidField {
                        id,
                        field: "script",
                        message: format!("expected a string, got {other}"),
                    })
                }
            };
            cases.insert(TestId::new(id), TestCase { input, output, script });
        }

        Ok(Self { cases })
    }
}

/// Load and validate the catalog at `path`.
pub fn load_catalog(path: &Path) -> Result<TestCatalog, CatalogError> {
    let origin = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CatalogError::NotFound {
                path: origin.clone(),
            }
        } else {
            CatalogError::Parse {
                path: origin.clone(),
                message: e.to_string(),
            }
        }
    })?;
    let value: Value = serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
        path: origin.clone(),
        message: e.to_string(),
    })?;
    let catalog = TestCatalog::from_value(value, &origin)?;
    debug!(path = %origin, cases = catalog.len(), "loaded test catalog");
    Ok(catalog)
}
