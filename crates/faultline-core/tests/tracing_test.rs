//! Tests for the Faultline tracing setup.

use std::sync::Mutex;

use faultline_core::tracing::{init_tracing, resolve_filter, DEFAULT_LOG_FILTER};

/// Serializes tests that manipulate FAULTLINE_LOG.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_unset_filter_uses_default() {
    assert_eq!(resolve_filter(None).to_string(), DEFAULT_LOG_FILTER);
    assert_eq!(DEFAULT_LOG_FILTER, "faultline=info");
}

#[test]
fn test_invalid_filter_falls_back_to_default() {
    let filter = resolve_filter(Some("faultline=not_a_level"));
    assert_eq!(filter.to_string(), DEFAULT_LOG_FILTER);
}

#[test]
fn test_per_module_filter_kept() {
    let rendered =
        resolve_filter(Some("faultline_engine=debug,faultline_storage=warn")).to_string();
    assert!(rendered.contains("faultline_engine=debug"));
    assert!(rendered.contains("faultline_storage=warn"));
    assert!(!rendered.contains(DEFAULT_LOG_FILTER));
}

#[test]
fn test_init_tracing_with_env_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("FAULTLINE_LOG", "faultline_engine=debug");
    init_tracing();
    init_tracing();
    std::env::remove_var("FAULTLINE_LOG");
}
