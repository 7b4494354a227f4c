//! Observability for Faultline.
//! `tracing` crate with `EnvFilter`, filter read from `FAULTLINE_LOG`.

pub mod setup;

pub use setup::{init_tracing, resolve_filter, DEFAULT_LOG_FILTER};
