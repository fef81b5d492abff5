//! Factory Prof
//!
//! Summaries, location hotspots and flamegraph profiles for the time a
//! test suite spends building fixtures with factories.
//!
//! This crate provides the core implementation for the `factory-prof`
//! CLI tool. The instrumentation side dumps a snapshot of per-factory
//! stats and stack samples; this crate turns it into:
//!
//! - a ranked usage table,
//! - per-factory location hotspots,
//! - a stackprof-style JSON document for a flamegraph viewer.
//!
//! ## Getting Started
//!
//! ```bash
//! factory-prof report --input tmp/test_prof/factories.json
//! factory-prof --help
//! ```

pub mod aggregator;
pub mod collector;
pub mod commands;
pub mod flamegraph;
pub mod output;
pub mod report;
pub mod session;
pub mod snapshot;
pub mod utils;
pub mod viewer;
