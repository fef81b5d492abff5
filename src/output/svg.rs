//! SVG flamegraph output writer.

use super::write_atomic;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::io::Write;
use std::path::Path;

/// Write SVG content to a file
///
/// # Arguments
/// * `svg_content` - SVG string from the flamegraph renderer
/// * `output_path` - Path to output SVG file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_svg(svg_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing SVG to: {}", output_path.display());

    if output_path.extension().map_or(true, |ext| ext != "svg") {
        debug!("Warning: File does not have .svg extension: {}", output_path.display());
    }

    write_atomic(output_path, |writer| {
        writer.write_all(svg_content.as_bytes())?;
        Ok(())
    })?;

    let file_size = svg_content.len();
    info!(
        "SVG written successfully ({} bytes, {:.2} KB)",
        file_size,
        file_size as f64 / 1024.0
    );

    Ok(())
}
