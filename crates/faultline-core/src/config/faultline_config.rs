//! Top-level Faultline configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{HistoryConfig, PathsConfig, ScoringConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`FAULTLINE_*`)
/// 3. Project config (`faultline.toml` in project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FaultlineConfig {
    pub scoring: ScoringConfig,
    pub history: HistoryConfig,
    pub paths: PathsConfig,
}

/// Caller-supplied overrides, applied last.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
    pub decay: Option<f64>,
}

impl FaultlineConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(constants::CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &FaultlineConfig) -> Result<(), ConfigError> {
        for (field, value) in [
            ("scoring.alpha", config.scoring.alpha),
            ("scoring.beta", config.scoring.beta),
            ("scoring.gamma", config.scoring.gamma),
        ] {
            if let Some(w) = value {
                if !w.is_finite() || w < 0.0 {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be a finite, non-negative number".to_string(),
                    });
                }
            }
        }
        if let Some(decay) = config.history.decay {
            if !(decay > 0.0 && decay < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "history.decay".to_string(),
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut FaultlineConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: FaultlineConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut FaultlineConfig, other: &FaultlineConfig) {
        if other.scoring.alpha.is_some() {
            base.scoring.alpha = other.scoring.alpha;
        }
        if other.scoring.beta.is_some() {
            base.scoring.beta = other.scoring.beta;
        }
        if other.scoring.gamma.is_some() {
            base.scoring.gamma = other.scoring.gamma;
        }
        if other.history.decay.is_some() {
            base.history.decay = other.history.decay;
        }

        let (b, o) = (&mut base.paths, &other.paths);
        for (dst, src) in [
            (&mut b.catalog, &o.catalog),
            (&mut b.input_matrix, &o.input_matrix),
            (&mut b.output_matrix, &o.output_matrix),
            (&mut b.fault_dir, &o.fault_dir),
            (&mut b.order, &o.order),
            (&mut b.scripts_dir, &o.scripts_dir),
        ] {
            if src.is_some() {
                dst.clone_from(src);
            }
        }
    }

    /// Apply environment variable overrides. Unparsable values are ignored.
    fn apply_env_overrides(config: &mut FaultlineConfig) {
        let read = |key: &str| std::env::var(key).ok().and_then(|v| v.parse::<f64>().ok());

        if let Some(v) = read("FAULTLINE_ALPHA") {
            config.scoring.alpha = Some(v);
        }
        if let Some(v) = read("FAULTLINE_BETA") {
            config.scoring.beta = Some(v);
        }
        if let Some(v) = read("FAULTLINE_GAMMA") {
            config.scoring.gamma = Some(v);
        }
        if let Some(v) = read("FAULTLINE_DECAY") {
            config.history.decay = Some(v);
        }
    }

    fn apply_overrides(config: &mut FaultlineConfig, o: &ConfigOverrides) {
        if o.alpha.is_some() {
            config.scoring.alpha = o.alpha;
        }
        if o.beta.is_some() {
            config.scoring.beta = o.beta;
        }
        if o.gamma.is_some() {
            config.scoring.gamma = o.gamma;
        }
        if o.decay.is_some() {
            config.history.decay = o.decay;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
