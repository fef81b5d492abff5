//! Encode stack samples into the exchange document, and decode it back.
//!
//! Ordering contract: distinct stacks are emitted in the order they were
//! first seen in the sample sequence, and frame ids are handed out (from 0)
//! in the order names are first seen while walking those distinct stacks.

use super::schema::{FlamegraphDocument, Frame};
use crate::snapshot::StackSample;
use crate::utils::config::{DOCUMENT_MODE, DOCUMENT_VERSION, SAMPLE_DELTA, SAMPLE_TIMESTAMP};
use crate::utils::error::FlamegraphError;
use log::debug;
use std::collections::{BTreeMap, HashMap};

/// One distinct stack and how many samples had it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackTally<'a> {
    pub stack: &'a [String],
    pub count: u64,
}

/// Tally identical stacks, keeping first-seen order
pub fn tally_stacks(samples: &[StackSample]) -> Vec<StackTally<'_>> {
    let mut index: HashMap<&[String], usize> = HashMap::new();
    let mut tallies: Vec<StackTally<'_>> = Vec::new();

    for sample in samples {
        let stack = sample.stack();
        match index.get(stack) {
            Some(&position) => tallies[position].count += 1,
            None => {
                index.insert(stack, tallies.len());
                tallies.push(StackTally { stack, count: 1 });
            }
        }
    }

    tallies
}

/// Name <-> id symbol table built in first-seen order
#[derive(Debug, Default)]
struct FrameTable<'a> {
    ids: HashMap<&'a str, u32>,
    frames: BTreeMap<u32, Frame>,
}

impl<'a> FrameTable<'a> {
    fn intern(&mut self, name: &'a str) -> u32 {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.frames.len() as u32;
        self.ids.insert(name, id);
        self.frames.insert(
            id,
            Frame {
                name: name.to_string(),
            },
        );
        id
    }
}

/// Encode stack samples into a flamegraph document
///
/// Empty input gives a document with no frames, no raw data and empty
/// timestamp arrays.
pub fn encode_stacks(samples: &[StackSample]) -> FlamegraphDocument {
    let tallies = tally_stacks(samples);
    let total_stacks: u64 = tallies.iter().map(|t| t.count).sum();

    let mut table = FrameTable::default();
    let mut raw: Vec<u64> = Vec::new();

    for tally in &tallies {
        raw.push(tally.stack.len() as u64);
        for name in tally.stack {
            raw.push(u64::from(table.intern(name)));
        }
        raw.push(tally.count);
    }

    debug!(
        "Encoded {} samples as {} distinct stacks over {} frames",
        total_stacks,
        tallies.len(),
        table.frames.len()
    );

    FlamegraphDocument {
        version: DOCUMENT_VERSION,
        mode: DOCUMENT_MODE.to_string(),
        frames: table.frames,
        raw,
        raw_sample_timestamps: vec![SAMPLE_TIMESTAMP; total_stacks as usize],
        raw_timestamp_deltas: vec![SAMPLE_DELTA; total_stacks as usize],
    }
}

/// A stack recovered from a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedStack {
    pub stack: Vec<String>,
    pub count: u64,
}

/// Decode the `raw` segments of a document against its frames
///
/// # Errors
/// * `FlamegraphError::MalformedRaw` - a segment is empty or truncated
/// * `FlamegraphError::UnknownFrame` - a frame id is missing from `frames`
pub fn decode_raw(document: &FlamegraphDocument) -> Result<Vec<DecodedStack>, FlamegraphError> {
    let raw = &document.raw;
    let mut stacks = Vec::new();
    let mut offset = 0;

    while offset < raw.len() {
        if raw[offset] == 0 {
            return Err(FlamegraphError::MalformedRaw {
                offset,
                reason: "segment has an empty stack".to_string(),
            });
        }

        // len ids plus the repeat count must follow the length
        let end = usize::try_from(raw[offset])
            .ok()
            .and_then(|len| offset.checked_add(1)?.checked_add(len))
            .filter(|&end| end < raw.len())
            .ok_or_else(|| FlamegraphError::MalformedRaw {
                offset,
                reason: format!(
                    "segment needs {} ids and a repeat count, {} values left",
                    raw[offset],
                    raw.len() - offset - 1
                ),
            })?;

        let stack = raw[offset + 1..end]
            .iter()
            .map(|&id| {
                u32::try_from(id)
                    .ok()
                    .and_then(|key| document.frames.get(&key))
                    .map(|frame| frame.name.clone())
                    .ok_or(FlamegraphError::UnknownFrame(id))
            })
            .collect::<Result<Vec<String>, FlamegraphError>>()?;

        stacks.push(DecodedStack {
            stack,
            count: raw[end],
        });
        offset = end + 1;
    }

    Ok(stacks)
}

/// Shape figures of a valid document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStats {
    pub frames: usize,
    pub distinct_stacks: usize,
    pub samples: u64,
}

/// Decode a document and check its timestamp arrays match the sample count
pub fn validate_document(document: &FlamegraphDocument) -> Result<DocumentStats, FlamegraphError> {
    let stacks = decode_raw(document)?;
    let samples: u64 = stacks.iter().map(|s| s.count).sum();

    for (field, len) in [
        ("raw_sample_timestamps", document.raw_sample_timestamps.len()),
        ("raw_timestamp_deltas", document.raw_timestamp_deltas.len()),
    ] {
        if len as u64 != samples {
            return Err(FlamegraphError::MalformedRaw {
                offset: document.raw.len(),
                reason: format!("{} has {} entries for {} samples", field, len, samples),
            });
        }
    }

    Ok(DocumentStats {
        frames: document.frames.len(),
        distinct_stacks: stacks.len(),
        samples,
    })
}

/// Separator between frames in a collapsed-stack line
const COLLAPSED_SEPARATOR: &str = ";";

/// Stands in for the separator inside a frame name
const SEPARATOR_REPLACEMENT: &str = ":";

/// Collapsed-stack lines (`"a;b;c 3"`) in first-seen order.
///
/// A `;` inside a factory name is rewritten to `:` so the name stays a single frame.
pub fn collapsed_lines(samples: &[StackSample]) -> Vec<String> {
    tally_stacks(samples)
        .iter()
        .map(|tally| {
            let frames: Vec<String> = tally
                .stack
                .iter()
                .map(|name| name.replace(COLLAPSED_SEPARATOR, SEPARATOR_REPLACEMENT))
                .collect();
            format!("{} {}", frames.join(COLLAPSED_SEPARATOR), tally.count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn samples(stacks: &[&[&str]]) -> Vec<StackSample> {
        stacks
            .iter()
            .enumerate()
            .map(|(i, stack)| StackSample::new(stack.iter().copied(), format!("spec/x_spec.rb:{}", i)).unwrap())
            .collect()
    }

    #[test]
    fn test_tally_first_seen_order() {
        let input = samples(&[&["a", "b"], &["a"], &["a", "b"]]);
        let tallies = tally_stacks(&input);

        assert_eq!(tallies.len(), 2);
        assert_eq!(tallies[0].stack, ["a".to_string(), "b".to_string()]);
        assert_eq!(tallies[0].count, 2);
        assert_eq!(tallies[1].count, 1);
    }

    #[test]
    fn test_encode_example() {
        let input = samples(&[&["a", "b"], &["a", "b"], &["a"]]);
        let document = encode_stacks(&input);

        assert_eq!(document.frames.len(), 2);
        assert_eq!(document.frames[&0].name, "a");
        assert_eq!(document.frames[&1].name, "b");
        assert_eq!(document.raw, vec![2, 0, 1, 2, 1, 0, 1]);
        assert_eq!(document.raw_sample_timestamps, vec![1, 1, 1]);
        assert_eq!(document.raw_timestamp_deltas, vec![1000, 1000, 1000]);
        assert_eq!(document.version, 1.2);
        assert_eq!(document.mode, "wall");
    }

    #[test]
    fn test_encode_empty() {
        let document = encode_stacks(&[]);
        assert!(document.frames.is_empty());
        assert!(document.raw.is_empty());
        assert!(document.raw_sample_timestamps.is_empty());
        assert!(document.raw_timestamp_deltas.is_empty());
    }

    #[test]
    fn test_repeated_name_shares_frame() {
        let input = samples(&[&["user", "account", "user"]]);
        let document = encode_stacks(&input);

        assert_eq!(document.frames.len(), 2);
        assert_eq!(document.raw, vec![3, 0, 1, 0, 1]);
    }

    #[test]
    fn test_decode_truncated() {
        let mut document = encode_stacks(&samples(&[&["a", "b"]]));
        document.raw.pop();
        assert!(matches!(
            decode_raw(&document),
            Err(FlamegraphError::MalformedRaw { offset: 0, .. })
        ));
    }

    #[test]
    fn test_decode_unknown_frame() {
        let mut document = encode_stacks(&samples(&[&["a"]]));
        document.raw = vec![1, 7, 1];
        assert!(matches!(decode_raw(&document), Err(FlamegraphError::UnknownFrame(7))));
    }

    #[test]
    fn test_decode_oversized_length() {
        let mut document = encode_stacks(&samples(&[&["a"]]));
        document.raw = vec![u64::MAX, 0, 1];
        assert!(matches!(
            decode_raw(&document),
            Err(FlamegraphError::MalformedRaw { offset: 0, .. })
        ));

        // length points one past the repeat count
        document.raw = vec![1, 0, 1, 3, 0, 0];
        assert!(matches!(
            decode_raw(&document),
            Err(FlamegraphError::MalformedRaw { offset: 3, .. })
        ));
    }

    #[test]
    fn test_validate_catches_timestamp_mismatch() {
        let mut document = encode_stacks(&samples(&[&["a"], &["a"]]));
        assert_eq!(validate_document(&document).unwrap().samples, 2);

        document.raw_timestamp_deltas.pop();
        assert!(validate_document(&document).is_err());
    }

    #[test]
    fn test_collapsed_lines() {
        let input = samples(&[&["a", "b"], &["a"], &["a", "b"]]);
        assert_eq!(collapsed_lines(&input), vec!["a;b 2".to_string(), "a 1".to_string()]);
    }

    #[test]
    fn test_collapsed_lines_keep_separator_inside_name() {
        let input = samples(&[&["user;admin", "account"]]);
        let lines = collapsed_lines(&input);

        assert_eq!(lines, vec!["user:admin;account 1".to_string()]);
        assert_eq!(lines[0].split(';').count(), 2);
    }
}
