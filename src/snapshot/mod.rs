//! Snapshot records and loading.
//!
//! This module handles:
//! - Strongly-typed factory stats and stack samples
//! - Validation of the instrumentation contract
//! - Loading snapshot files from disk

pub mod loader;
pub mod schema;

// Re-export main types
pub use loader::{load_snapshot, parse_snapshot};
pub use schema::{FactoryStat, ProfilingSnapshot, SnapshotFile, StackSample};
