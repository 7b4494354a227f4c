//! Shared constants for the Faultline engine.

/// Faultline version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default weight of the averaged input-space distance.
pub const DEFAULT_ALPHA: f64 = 0.5;

/// Default weight of the averaged output-space distance.
pub const DEFAULT_BETA: f64 = 0.5;

/// Default weight of the historical reward.
pub const DEFAULT_GAMMA: f64 = 1.0;

/// Default EMA decay. Higher values forget old failures more slowly.
pub const DEFAULT_DECAY: f64 = 0.7;

/// Starting value of the reward fold before any record is applied.
pub const NEUTRAL_REWARD_PRIOR: f64 = 0.5;

/// Absolute tolerance under which a distance matrix counts as all-zero.
pub const ZERO_MATRIX_ATOL: f64 = 1e-8;

/// Number of top-ranked tests logged after a planning pass.
pub const TOP_K_DIAGNOSTICS: usize = 5;

/// Project-level config file name.
pub const CONFIG_FILE_NAME: &str = "faultline.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "FAULTLINE_LOG";

// ---- Artifact layout (relative to project root) ----

pub const DEFAULT_CATALOG_PATH: &str = "test/test-cases.json";
pub const DEFAULT_INPUT_MATRIX_PATH: &str = "test/string-distances/input.json";
pub const DEFAULT_OUTPUT_MATRIX_PATH: &str = "test/string-distances/output.json";
pub const DEFAULT_FAULT_DIR: &str = "test/fault-matrices";
pub const DEFAULT_ORDER_PATH: &str = "test/tcp.json";
pub const DEFAULT_SCRIPTS_DIR: &str = "test/test-scripts";

/// Prefix of fault history record keys (`V<version>.json`).
pub const HISTORY_KEY_PREFIX: &str = "V";

/// Extension of fault history record keys.
pub const HISTORY_KEY_EXTENSION: &str = ".json";

/// Version assigned to the first record in an empty history.
pub const FIRST_HISTORY_VERSION: u64 = 1;
