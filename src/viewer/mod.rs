//! Handing the written document to an external viewer.

use crate::utils::error::LaunchError;
use log::{debug, info};
use std::path::Path;
use std::process::Command;

/// Opens a written flamegraph document
pub trait Launcher {
    /// Program name shown in progress messages
    fn name(&self) -> &str;

    fn launch(&self, path: &Path) -> Result<(), LaunchError>;
}

/// Runs a viewer program with the document path as its only argument
#[derive(Debug, Clone)]
pub struct CommandLauncher {
    program: String,
}

impl CommandLauncher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Launcher for CommandLauncher {
    fn name(&self) -> &str {
        &self.program
    }

    fn launch(&self, path: &Path) -> Result<(), LaunchError> {
        debug!("Running: {} {}", self.program, path.display());

        let status = Command::new(&self.program)
            .arg(path)
            .status()
            .map_err(|source| LaunchError::SpawnFailed {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(LaunchError::ExitStatus {
                program: self.program.clone(),
                status: status.to_string(),
            });
        }

        info!("Viewer '{}' finished", self.program);
        Ok(())
    }
}

/// Launcher that never starts anything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLauncher;

impl Launcher for NoopLauncher {
    fn name(&self) -> &str {
        "noop"
    }

    fn launch(&self, path: &Path) -> Result<(), LaunchError> {
        debug!("Skipping viewer launch for {}", path.display());
        Ok(())
    }
}
