//! # faultline-storage
//!
//! Read/write contracts for every persisted artifact the engine touches.
//! All JSON is written pretty-printed and reads back losslessly.

pub mod catalog;
pub mod history_dir;
pub mod json;
pub mod matrix_file;
pub mod order_file;

pub use catalog::{load_catalog, TestCase, TestCatalog};
pub use history_dir::{HistoryEntry, HistoryScan};
