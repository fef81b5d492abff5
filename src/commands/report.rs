//! Report command implementation.
//!
//! The report command:
//! 1. Resolves the configuration (file, then CLI overrides)
//! 2. Loads the snapshot
//! 3. Runs the session: summary, hotspots, document, viewer

use crate::report::LogSink;
use crate::session::{DumpOutcome, ProfilingSession};
use crate::snapshot::load_snapshot;
use crate::utils::config::{load_config, ReportConfig, MAX_TOP_COUNT};
use crate::viewer::{CommandLauncher, Launcher, NoopLauncher};
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args.
/// `None` fields fall back to the config file, then to the defaults.
#[derive(Debug, Clone, Default)]
pub struct ReportArgs {
    /// Snapshot JSON written by the instrumentation
    pub input: PathBuf,

    /// Optional TOML configuration file
    pub config: Option<PathBuf>,

    /// Output path for the flamegraph document
    pub output: Option<PathBuf>,

    /// Output path for an SVG flamegraph
    pub svg: Option<PathBuf>,

    /// Factories in the table and hotspot report
    pub top_factories: Option<usize>,

    /// Locations per factory in the hotspot report
    pub top_locations: Option<usize>,

    /// Viewer program
    pub viewer: Option<String>,

    /// Skip launching the viewer
    pub no_launch: bool,
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input snapshot path cannot be empty");
    }

    for (flag, value) in [
        ("top-factories", args.top_factories),
        ("top-locations", args.top_locations),
    ] {
        match value {
            Some(0) => anyhow::bail!("{} must be greater than 0", flag),
            Some(n) if n > MAX_TOP_COUNT => {
                anyhow::bail!("{} is too large (max {})", flag, MAX_TOP_COUNT)
            }
            _ => {}
        }
    }

    if let Some(viewer) = &args.viewer {
        if viewer.trim().is_empty() {
            anyhow::bail!("Viewer program cannot be empty");
        }
    }

    Ok(())
}

/// Merge the config file (if any) with CLI overrides
pub fn resolve_config(args: &ReportArgs) -> Result<ReportConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ReportConfig::default(),
    };

    if let Some(output) = &args.output {
        config = config.with_output_path(output);
    }
    if args.svg.is_some() {
        config = config.with_svg_path(args.svg.clone());
    }
    if let Some(top) = args.top_factories {
        config = config.with_top_factories(top);
    }
    if let Some(top) = args.top_locations {
        config = config.with_top_locations(top);
    }
    if let Some(viewer) = &args.viewer {
        config = config.with_viewer(viewer);
    }
    if args.no_launch {
        config = config.with_launch_viewer(false);
    }

    config.validate()?;
    Ok(config)
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
pub fn execute_report(args: ReportArgs) -> Result<DumpOutcome> {
    let start_time = Instant::now();

    let config = resolve_config(&args)?;
    debug!("Resolved config: {:?}", config);

    info!("Loading snapshot: {}", args.input.display());
    let file = load_snapshot(&args.input)
        .with_context(|| format!("Failed to load snapshot {}", args.input.display()))?;

    let now = file.finished_at.unwrap_or_else(Utc::now);
    let session = ProfilingSession::resume(file.started_at, config);
    debug!("Session started at {}", session.started_at());

    let launcher: Box<dyn Launcher> = if session.config().launch_viewer {
        Box::new(CommandLauncher::new(session.config().viewer.clone()))
    } else {
        Box::new(NoopLauncher)
    };

    let outcome = session.dump(&file.snapshot, now, &mut LogSink, launcher.as_ref())?;

    if let DumpOutcome::Written { path, .. } = &outcome {
        info!("✓ Flamegraph document written to: {}", path.display());
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(outcome)
}
