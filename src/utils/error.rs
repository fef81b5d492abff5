//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs, commands
//! and the session pipeline.

use thiserror::Error;

/// Errors raised while loading or constructing snapshot records
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid factory stat '{name}': {reason}")]
    InvalidStat { name: String, reason: String },

    #[error("Invalid stack sample at {location}: {reason}")]
    InvalidStack { location: String, reason: String },
}

/// Errors that can occur during flamegraph encoding, decoding and rendering
#[derive(Error, Debug)]
pub enum FlamegraphError {
    #[error("Empty stack data")]
    EmptyStacks,

    #[error("Malformed raw sample data at offset {offset}: {reason}")]
    MalformedRaw { offset: usize, reason: String },

    #[error("Unknown frame id: {0}")]
    UnknownFrame(u64),

    #[error("Failed to render flamegraph: {0}")]
    RenderFailed(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Failed to finalize file: {0}")]
    PersistFailed(#[from] tempfile::PersistError),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur when handing the document to a viewer
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Failed to start viewer '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Viewer '{program}' exited with {status}")]
    ExitStatus { program: String, status: String },
}

/// Errors in report configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}
