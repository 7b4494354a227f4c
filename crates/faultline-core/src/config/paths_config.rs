//! Artifact locations, relative to the project root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PathsConfig {
    pub catalog: Option<PathBuf>,
    pub input_matrix: Option<PathBuf>,
    pub output_matrix: Option<PathBuf>,
    pub fault_dir: Option<PathBuf>,
    pub order: Option<PathBuf>,
    pub scripts_dir: Option<PathBuf>,
}

fn resolve(root: &Path, value: &Option<PathBuf>, default: &str) -> PathBuf {
    root.join(value.as_deref().unwrap_or_else(|| Path::new(default)))
}

impl PathsConfig {
    pub fn catalog(&self, root: &Path) -> PathBuf {
        resolve(root, &self.catalog, constants::DEFAULT_CATALOG_PATH)
    }

    pub fn input_matrix(&self, root: &Path) -> PathBuf {
        resolve(root, &self.input_matrix, constants::DEFAULT_INPUT_MATRIX_PATH)
    }

    pub fn output_matrix(&self, root: &Path) -> PathBuf {
        resolve(root, &self.output_matrix, constants::DEFAULT_OUTPUT_MATRIX_PATH)
    }

    pub fn fault_dir(&self, root: &Path) -> PathBuf {
        resolve(root, &self.fault_dir, constants::DEFAULT_FAULT_DIR)
    }

    pub fn order(&self, root: &Path) -> PathBuf {
        resolve(root, &self.order, constants::DEFAULT_ORDER_PATH)
    }

    pub fn scripts_dir(&self, root: &Path) -> PathBuf {
        resolve(root, &self.scripts_dir, constants::DEFAULT_SCRIPTS_DIR)
    }
}
