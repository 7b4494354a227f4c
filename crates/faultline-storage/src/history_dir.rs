//! Append-only fault history directory.
//!
//! Each completed execution cycle leaves one immutable record named
//! `V<version>.json`, holding `test id → 0|1`. Chronology comes only from
//! the numeric version in the key, never from directory listing order.
//!
//! New versions are `max(existing) + 1`, computed from a fresh listing on
//! every append. Two cycles appending to the same directory concurrently
//! can race on that value; this is not handled beyond refusing to overwrite
//! (the loser gets `StorageError::VersionExists`). Run one cycle at a time.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, warn};

use faultline_core::constants::{
    FIRST_HISTORY_VERSION, HISTORY_KEY_EXTENSION, HISTORY_KEY_PREFIX,
};
use faultline_core::errors::{HistorySkip, PipelineResult, StorageError};
use faultline_core::types::{FaultRecord, OutcomeMap};

use crate::json;

static HISTORY_KEY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^V(\d+)\.json$").ok());

/// Parse the version embedded in a record key such as `V12.json`.
///
/// `None` for keys that do not match or whose digits overflow `u64`.
pub fn parse_version(key: &str) -> Option<u64> {
    let re = HISTORY_KEY.as_ref()?;
    re.captures(key)?.get(1)?.as_str().parse().ok()
}

/// Next free version for a directory whose current listing is `listing`.
///
/// Pure scan-and-increment: `max(parsed versions) + 1`, or 1 when nothing
/// parses. Keys that do not parse are not considered.
pub fn next_version<S: AsRef<str>>(listing: &[S]) -> u64 {
    listing
        .iter()
        .filter_map(|k| parse_version(k.as_ref()))
        .max()
        .map_or(FIRST_HISTORY_VERSION, |v| v.saturating_add(1))
}

/// Storage key for `version`.
pub fn record_key(version: u64) -> String {
    format!("{HISTORY_KEY_PREFIX}{version}{HISTORY_KEY_EXTENSION}")
}

/// A record discovered in the history directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub version: u64,
    pub key: String,
    pub path: PathBuf,
}

/// Outcome of classifying a directory listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryScan {
    /// Usable records, ascending by `(version, key)`.
    pub entries: Vec<HistoryEntry>,
    /// `.json` files whose key carries no parsable version.
    pub skipped: Vec<HistorySkip>,
}

/// File names in `dir`. A missing directory lists as empty.
pub fn list_keys(dir: &Path) -> Result<Vec<String>, StorageError> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "fault history directory absent");
        return Ok(Vec::new());
    }
    let mut keys = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| StorageError::io(dir, &e))? {
        let entry = entry.map_err(|e| StorageError::io(dir, &e))?;
        if !entry.path().is_file() {
            continue;
        }
        keys.push(entry.file_name().to_string_lossy().into_owned());
    }
    keys.sort();
    Ok(keys)
}

/// Classify an explicit listing of `dir`.
///
/// Only `.json` keys are candidate records. A candidate whose version does
/// not parse is reported in `skipped`; any other file is ignored.
pub fn scan_listing<S: AsRef<str>>(dir: &Path, listing: &[S]) -> HistoryScan {
    let mut scan = HistoryScan::default();
    for key in listing.iter().map(AsRef::as_ref) {
        if !key.ends_with(HISTORY_KEY_EXTENSION) {
            continue;
        }
        match parse_version(key) {
            Some(version) => scan.entries.push(HistoryEntry {
                version,
                key: key.to_string(),
                path: dir.join(key),
            }),
            None => {
                warn!(key, "skipping fault history record with unparsable version");
                scan.skipped.push(HistorySkip {
                    key: key.to_string(),
                    reason: "unparsable version".to_string(),
                });
            }
        }
    }
    scan.entries
        .sort_by(|a, b| a.version.cmp(&b.version).then_with(|| a.key.cmp(&b.key)));
    scan
}

/// List and classify `dir`.
pub fn scan(dir: &Path) -> Result<HistoryScan, StorageError> {
    let keys = list_keys(dir)?;
    Ok(scan_listing(dir, &keys))
}

pub fn read_record(entry: &HistoryEntry) -> Result<FaultRecord, StorageError> {
    let outcomes: OutcomeMap = json::read_json(&entry.path)?;
    Ok(FaultRecord::new(entry.version, outcomes))
}

/// Load every usable record in chronological order.
///
/// Records with an unparsable version or an unreadable body are skipped
/// with a warning and listed in `skipped`; they never abort the load.
pub fn load_history(dir: &Path) -> Result<PipelineResult<Vec<FaultRecord>>, StorageError> {
    let scan = scan(dir)?;
    let mut result = PipelineResult::new(Vec::with_capacity(scan.entries.len()));
    for skip in scan.skipped {
        result.add_skip(skip);
    }
    for entry in &scan.entries {
        match read_record(entry) {
            Ok(record) => result.data.push(record),
            Err(e) => {
                warn!(key = %entry.key, error = %e, "skipping unreadable fault history record");
                result.add_skip(HistorySkip {
                    key: entry.key.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }
    debug!(
        dir = %dir.display(),
        records = result.data.len(),
        skipped = result.skipped.len(),
        "loaded fault history"
    );
    Ok(result)
}

/// Persist `record` under its own version. Never overwrites.
pub fn write_record(dir: &Path, record: &FaultRecord) -> Result<PathBuf, StorageError> {
    std::fs::create_dir_all(dir).map_err(|e| StorageError::io(dir, &e))?;
    let path = dir.join(record_key(record.version));
    if !json::write_json_new(&path, &record.outcomes)? {
        return Err(StorageError::VersionExists {
            version: record.version,
            path: path.display().to_string(),
        });
    }
    Ok(path)
}

/// Append a new record for a just-finished cycle and return it.
pub fn append_record(dir: &Path, outcomes: OutcomeMap) -> Result<FaultRecord, StorageError> {
    let version = next_version(&list_keys(dir)?);
    let record = FaultRecord::new(version, outcomes);
    let path = write_record(dir, &record)?;
    info!(
        version,
        path = %path.display(),
        failed = record.failed_count(),
        "fault history record appended"
    );
    Ok(record)
}
