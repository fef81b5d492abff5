//! Sampled-profile exchange document.
//!
//! This is the stackprof-style JSON that speedscope imports: a frame symbol
//! table plus a flat `raw` sequence of `[len, frame ids..., repeat]`
//! segments. Timestamps are placeholders, not measurements.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Symbol-table entry, keyed by its id in [`FlamegraphDocument::frames`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub name: String,
}

/// Document handed to the external viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlamegraphDocument {
    pub version: f64,

    pub mode: String,

    /// Frame id -> frame. Serialized with stringified ids as object keys.
    pub frames: BTreeMap<u32, Frame>,

    /// Concatenated `[stack_len, id_0, ..., id_{n-1}, repeat_count]` segments
    pub raw: Vec<u64>,

    pub raw_sample_timestamps: Vec<u64>,

    pub raw_timestamp_deltas: Vec<u64>,
}

impl FlamegraphDocument {
    /// Number of samples the document stands for
    pub fn sample_count(&self) -> usize {
        self.raw_sample_timestamps.len()
    }
}
