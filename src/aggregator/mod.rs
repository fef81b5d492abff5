//! Aggregation of snapshot data into summaries and hotspots.
//!
//! This module transforms the raw snapshot into:
//! - Run totals and the cost ranking of factories
//! - Per-factory location hotspots
//! - The shared tally-and-rank primitive

pub mod hotspots;
pub mod ranking;
pub mod stats;

// Re-export main types and functions
pub use hotspots::{aggregate_locations, analyze_hotspots, FactoryHotspots, LocationReport};
pub use ranking::{rank_frequency, rank_weighted, Ranked};
pub use stats::{rank, summarize, top_factories, StatsSummary};
