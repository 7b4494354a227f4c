//! Tests for the Faultline configuration system.

use std::sync::Mutex;

use faultline_core::config::{ConfigOverrides, FaultlineConfig};
use faultline_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all FAULTLINE_ env vars to prevent cross-test contamination.
fn clear_env_vars() {
    for key in [
        "FAULTLINE_ALPHA",
        "FAULTLINE_BETA",
        "FAULTLINE_GAMMA",
        "FAULTLINE_DECAY",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_defaults_without_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let config = FaultlineConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.scoring.effective_alpha(), 0.5);
    assert_eq!(config.scoring.effective_beta(), 0.5);
    assert_eq!(config.scoring.effective_gamma(), 1.0);
    assert_eq!(config.history.effective_decay(), 0.7);
    assert_eq!(
        config.paths.fault_dir(dir.path()),
        dir.path().join("test/fault-matrices")
    );
    assert_eq!(config.paths.order(dir.path()), dir.path().join("test/tcp.json"));
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("faultline.toml"),
        r#"
[scoring]
alpha = 0.2
gamma = 2.0

[history]
decay = 0.9

[paths]
order = "out/order.json"
"#,
    )
    .unwrap();

    std::env::set_var("FAULTLINE_GAMMA", "3.0");
    std::env::set_var("FAULTLINE_DECAY", "0.8");

    let overrides = ConfigOverrides {
        decay: Some(0.6),
        ..Default::default()
    };
    let config = FaultlineConfig::load(dir.path(), Some(&overrides)).unwrap();

    // Project file beats defaults.
    assert_eq!(config.scoring.effective_alpha(), 0.2);
    assert_eq!(config.scoring.effective_beta(), 0.5);
    // Env beats project file.
    assert_eq!(config.scoring.effective_gamma(), 3.0);
    // Overrides beat env.
    assert_eq!(config.history.effective_decay(), 0.6);
    assert_eq!(config.paths.order(dir.path()), dir.path().join("out/order.json"));

    clear_env_vars();
}

#[test]
fn test_unparsable_env_value_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::env::set_var("FAULTLINE_ALPHA", "not-a-number");
    let config = FaultlineConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.scoring.alpha, None);

    clear_env_vars();
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("faultline.toml"), "[scoring\nalpha = ").unwrap();
    let err = FaultlineConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_decay_must_be_open_interval() {
    for bad in [0.0, 1.0, -0.1, 1.5] {
        let config = FaultlineConfig::from_toml(&format!("[history]\ndecay = {bad:?}")).unwrap();
        let err = FaultlineConfig::validate(&config).unwrap_err();
        match err {
            ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "history.decay"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[test]
fn test_negative_weight_rejected() {
    let config = FaultlineConfig::from_toml("[scoring]\nbeta = -1.0").unwrap();
    let err = FaultlineConfig::validate(&config).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationFailed { ref field, .. } if field == "scoring.beta"
    ));
}

#[test]
fn test_unknown_keys_ignored_and_toml_round_trip() {
    let config = FaultlineConfig::from_toml(
        r#"
[scoring]
alpha = 0.25
future_knob = true
"#,
    )
    .unwrap();
    let rendered = config.to_toml().unwrap();
    let back = FaultlineConfig::from_toml(&rendered).unwrap();
    assert_eq!(back.scoring.alpha, Some(0.25));
}
