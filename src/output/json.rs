//! Flamegraph document writer.

use super::write_atomic;
use crate::flamegraph::FlamegraphDocument;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Write a flamegraph document to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `document` - Encoded document
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::PersistFailed` - the finished temp file could not replace the target
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let document = encode_stacks(&snapshot.stacks);
/// write_document(&document, "tmp/test_prof/stackprof.json")?;
/// ```
pub fn write_document(
    document: &FlamegraphDocument,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing flamegraph document to: {}", output_path.display());

    write_atomic(output_path, |writer| {
        serde_json::to_writer(writer, document).map_err(OutputError::SerializationFailed)
    })?;

    info!(
        "Document written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a flamegraph document from a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_document(input_path: impl AsRef<Path>) -> Result<FlamegraphDocument, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading document from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let document: FlamegraphDocument =
        serde_json::from_reader(BufReader::new(file)).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Document loaded: version {}, {} frames",
        document.version,
        document.frames.len()
    );

    Ok(document)
}
