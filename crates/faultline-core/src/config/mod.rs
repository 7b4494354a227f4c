//! Configuration system for Faultline.
//! TOML-based, 3-layer resolution: overrides > env > project > defaults.

pub mod faultline_config;
pub mod history_config;
pub mod paths_config;
pub mod scoring_config;

pub use faultline_config::{ConfigOverrides, FaultlineConfig};
pub use history_config::HistoryConfig;
pub use paths_config::PathsConfig;
pub use scoring_config::ScoringConfig;
