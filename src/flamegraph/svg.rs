//! SVG flamegraph rendering via inferno.
//!
//! The tallied stacks are turned into collapsed-stack lines and fed to
//! inferno, so the SVG shows the same sample weights as the JSON document.

use super::encoder::collapsed_lines;
use crate::snapshot::StackSample;
use crate::utils::error::FlamegraphError;
use inferno::flamegraph::{self, Options};
use log::info;

/// Flamegraph configuration
#[derive(Debug, Clone)]
pub struct FlamegraphConfig {
    pub title: String,
    pub count_name: String,
}

impl Default for FlamegraphConfig {
    fn default() -> Self {
        Self {
            title: "Factory Stacks".to_string(),
            count_name: "creations".to_string(),
        }
    }
}

impl FlamegraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Generate an SVG flamegraph from stack samples
///
/// # Errors
/// * `FlamegraphError::EmptyStacks` - nothing to draw
/// * `FlamegraphError::RenderFailed` - inferno rejected the input
pub fn generate_svg(
    samples: &[StackSample],
    config: &FlamegraphConfig,
) -> Result<String, FlamegraphError> {
    if samples.is_empty() {
        return Err(FlamegraphError::EmptyStacks);
    }

    let lines = collapsed_lines(samples);
    info!("Generating flamegraph from {} distinct stacks", lines.len());

    let mut options = Options::default();
    options.title = config.title.clone();
    options.count_name = config.count_name.clone();

    let mut svg = Vec::new();
    flamegraph::from_lines(&mut options, lines.iter().map(String::as_str), &mut svg)
        .map_err(|e| FlamegraphError::RenderFailed(e.to_string()))?;

    let svg = String::from_utf8(svg).map_err(|e| FlamegraphError::RenderFailed(e.to_string()))?;

    info!("Flamegraph generated successfully ({} bytes)", svg.len());
    Ok(svg)
}
