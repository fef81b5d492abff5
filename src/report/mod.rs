//! Text reports.
//!
//! - Factory usage summary and ranked table
//! - Per-factory location hotspots
//! - The sink abstraction both are written through

pub mod hotspots;
pub mod simple;
pub mod sink;

pub use hotspots::{format_factory_hotspots, print_hotspot_report};
pub use simple::{format_row, format_seconds, format_simple_report, print_simple_report};
pub use sink::{BufferSink, LogSink, ReportSink};
