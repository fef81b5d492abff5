//! Configuration and constants for the report pipeline.

use crate::utils::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the flamegraph document (relative to the working dir)
pub const DEFAULT_OUTPUT_PATH: &str = "tmp/test_prof/stackprof.json";

/// How many factories the summary table and hotspot report cover
pub const DEFAULT_TOP_FACTORIES: usize = 10;

/// How many locations are listed per factory in the hotspot report
pub const DEFAULT_TOP_LOCATIONS: usize = 10;

/// Program used to open the flamegraph document
pub const DEFAULT_VIEWER: &str = "speedscope";

// Exchange document header. The timeline is synthetic: every sample gets
// the same placeholder timestamp and delta.
pub const DOCUMENT_VERSION: f64 = 1.2;
pub const DOCUMENT_MODE: &str = "wall";
pub const SAMPLE_TIMESTAMP: u64 = 1;
pub const SAMPLE_DELTA: u64 = 1000;

/// Upper bound accepted for the top-N knobs
pub const MAX_TOP_COUNT: usize = 1000;

/// Report pipeline configuration
///
/// Every field is optional in the TOML file; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Where the flamegraph document is written
    pub output_path: PathBuf,

    /// Optional SVG flamegraph rendered next to the document
    pub svg_path: Option<PathBuf>,

    /// Factories shown in the summary table and the hotspot report
    pub top_factories: usize,

    /// Locations listed per factory in the hotspot report
    pub top_locations: usize,

    /// Viewer program handed the document path
    pub viewer: String,

    /// Whether to launch the viewer at all
    pub launch_viewer: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            svg_path: None,
            top_factories: DEFAULT_TOP_FACTORIES,
            top_locations: DEFAULT_TOP_LOCATIONS,
            viewer: DEFAULT_VIEWER.to_string(),
            launch_viewer: true,
        }
    }
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_svg_path(mut self, path: Option<PathBuf>) -> Self {
        self.svg_path = path;
        self
    }

    pub fn with_top_factories(mut self, top: usize) -> Self {
        self.top_factories = top;
        self
    }

    pub fn with_top_locations(mut self, top: usize) -> Self {
        self.top_locations = top;
        self
    }

    pub fn with_viewer(mut self, viewer: impl Into<String>) -> Self {
        self.viewer = viewer.into();
        self
    }

    pub fn with_launch_viewer(mut self, launch: bool) -> Self {
        self.launch_viewer = launch;
        self
    }

    /// Check the knobs are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("top_factories", self.top_factories),
            ("top_locations", self.top_locations),
        ] {
            if value == 0 || value > MAX_TOP_COUNT {
                return Err(ConfigError::InvalidValue(format!(
                    "{} must be between 1 and {} (got {})",
                    field, MAX_TOP_COUNT, value
                )));
            }
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue(
                "output_path cannot be empty".to_string(),
            ));
        }

        if self.launch_viewer && self.viewer.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "viewer cannot be empty when launching is enabled".to_string(),
            ));
        }

        Ok(())
    }
}

/// Load a report configuration from a TOML file
///
/// # Arguments
/// * `path` - Path to the TOML configuration file
///
/// # Errors
/// * `ConfigError::Io` - file cannot be read
/// * `ConfigError::Toml` - file is not valid TOML for `ReportConfig`
pub fn load_config(path: impl AsRef<Path>) -> Result<ReportConfig, ConfigError> {
    let content = fs::read_to_string(path.as_ref())?;
    let config: ReportConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
