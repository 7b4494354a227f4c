//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

/// Filter used when `FAULTLINE_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "faultline=info";

static INIT: Once = Once::new();

/// Build the filter for a raw `FAULTLINE_LOG` value, falling back to
/// [`DEFAULT_LOG_FILTER`] when it is absent or does not parse.
pub fn resolve_filter(raw: Option<&str>) -> EnvFilter {
    raw.and_then(|r| EnvFilter::try_new(r).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Initialize the Faultline tracing/logging system.
///
/// Reads `FAULTLINE_LOG` for per-module log levels, e.g.
/// `FAULTLINE_LOG=faultline_engine=debug,faultline_storage=warn`.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let raw = std::env::var(LOG_ENV_VAR).ok();
        let filter = resolve_filter(raw.as_deref());

        // Another subscriber may already be installed by the host process.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
