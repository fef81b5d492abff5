//! Snapshot file loader.
//!
//! Reads the JSON the instrumentation side dumps at the end of a run.
//! Records are validated while deserializing, so a malformed stat or stack
//! fails the whole load instead of being skipped.

use super::schema::SnapshotFile;
use crate::utils::error::SnapshotError;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse a snapshot from an already-decoded JSON value
///
/// # Errors
/// * `SnapshotError::JsonError` - wrong shape, or a record failed validation
pub fn parse_snapshot(raw: &serde_json::Value) -> Result<SnapshotFile, SnapshotError> {
    let file: SnapshotFile = serde_json::from_value(raw.clone())?;

    debug!(
        "Parsed snapshot: {} factory stats, {} stack samples",
        file.snapshot.stats.len(),
        file.snapshot.stacks.len()
    );

    Ok(file)
}

/// Load a snapshot file from disk
///
/// # Errors
/// * `SnapshotError::Io` - file cannot be opened
/// * `SnapshotError::JsonError` - invalid JSON or invalid records
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<SnapshotFile, SnapshotError> {
    let path = path.as_ref();

    debug!("Reading snapshot from: {}", path.display());

    let file = File::open(path)?;
    let raw: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;

    parse_snapshot(&raw)
}
