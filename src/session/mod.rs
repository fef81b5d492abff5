//! Profiling session: created when the test run starts, consumed when the
//! run ends to produce every report.
//!
//! All computation over the snapshot happens before anything is written,
//! printed or launched.

use crate::aggregator::{analyze_hotspots, rank, summarize};
use crate::flamegraph::{encode_stacks, generate_svg, FlamegraphConfig};
use crate::output::{write_document, write_svg};
use crate::report::{print_hotspot_report, print_simple_report, ReportSink};
use crate::snapshot::ProfilingSnapshot;
use crate::utils::config::ReportConfig;
use crate::viewer::Launcher;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Duration;

/// What a finished session produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpOutcome {
    /// No factory was created during the run; nothing was written
    NoData,

    Written {
        path: PathBuf,
        svg_path: Option<PathBuf>,
        launched: bool,
    },
}

/// A profiling run in progress
#[derive(Debug, Clone)]
pub struct ProfilingSession {
    started_at: DateTime<Utc>,
    config: ReportConfig,
}

impl ProfilingSession {
    /// Begin a session now
    pub fn start(config: ReportConfig) -> Self {
        Self::resume(Utc::now(), config)
    }

    /// Rebuild a session from a recorded start time
    pub fn resume(started_at: DateTime<Utc>, config: ReportConfig) -> Self {
        Self { started_at, config }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Wall time between the session start and `now`, zero if `now` is earlier
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        (now - self.started_at).to_std().unwrap_or(Duration::ZERO)
    }

    /// Finish the session: report, write the document and launch the viewer
    ///
    /// # Arguments
    /// * `snapshot` - everything the instrumentation collected
    /// * `now` - end of the run, for the elapsed wall time
    /// * `sink` - receives the text reports
    /// * `launcher` - opens the written document
    pub fn dump(
        self,
        snapshot: &ProfilingSnapshot,
        now: DateTime<Utc>,
        sink: &mut dyn ReportSink,
        launcher: &dyn Launcher,
    ) -> Result<DumpOutcome> {
        if snapshot.is_empty() {
            sink.info("No factories detected");
            return Ok(DumpOutcome::NoData);
        }

        let config = &self.config;
        let elapsed = self.elapsed(now);

        // compute
        let summary = summarize(&snapshot.stats);
        let ranked = rank(&snapshot.stats);
        let top: Vec<_> = ranked.iter().copied().take(config.top_factories).collect();
        let hotspots = analyze_hotspots(
            &ranked,
            &snapshot.stacks,
            config.top_factories,
            config.top_locations,
        );
        let document = encode_stacks(&snapshot.stacks);
        let svg = match &config.svg_path {
            Some(_) if !snapshot.stacks.is_empty() => Some(
                generate_svg(&snapshot.stacks, &FlamegraphConfig::default())
                    .context("Failed to render SVG flamegraph")?,
            ),
            _ => None,
        };

        debug!(
            "Session computed: {} factories ranked, {} hotspot blocks, {} raw values",
            ranked.len(),
            hotspots.len(),
            document.raw.len()
        );

        // report
        print_simple_report(sink, &top, &summary, elapsed);
        print_hotspot_report(sink, &hotspots);

        // hand off
        sink.info(&format!(
            "Writing the report to {}...",
            config.output_path.display()
        ));
        write_document(&document, &config.output_path)
            .context("Failed to write flamegraph document")?;

        let svg_path = match (svg, &config.svg_path) {
            (Some(svg), Some(path)) => {
                write_svg(&svg, path).context("Failed to write SVG flamegraph")?;
                info!("✓ Flamegraph written to: {}", path.display());
                Some(path.clone())
            }
            _ => None,
        };

        let launched = if config.launch_viewer {
            sink.info(&format!("Launching {}", launcher.name()));
            launcher
                .launch(&config.output_path)
                .context("Failed to launch viewer")?;
            true
        } else {
            debug!("Viewer launch disabled");
            false
        };

        Ok(DumpOutcome::Written {
            path: config.output_path.clone(),
            svg_path,
            launched,
        })
    }
}
