//! Output writers for flamegraph documents and SVGs.
//!
//! Every write goes to a temporary file next to the target and is renamed
//! over it once complete, so a failed write never leaves a partial file.

pub mod json;
pub mod svg;

// Re-export main functions
pub use json::{read_document, write_document};
pub use svg::write_svg;

use crate::utils::error::OutputError;
use log::debug;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Write a file atomically
///
/// `fill` writes the content into a buffered temp file in the target's
/// directory; the temp file only replaces `path` if `fill` succeeds.
pub(crate) fn write_atomic<F>(path: &Path, fill: F) -> Result<(), OutputError>
where
    F: FnOnce(&mut BufWriter<&mut NamedTempFile>) -> Result<(), OutputError>,
{
    validate_path(path)?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !parent.exists() {
        debug!("Creating parent directories: {}", parent.display());
        std::fs::create_dir_all(parent).map_err(|e| {
            OutputError::InvalidPath(format!(
                "Cannot create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut temp = NamedTempFile::new_in(parent)?;
    {
        let mut writer = BufWriter::new(&mut temp);
        fill(&mut writer)?;
        writer.flush()?;
    }
    temp.as_file().sync_all()?;
    temp.persist(path)?;

    Ok(())
}
