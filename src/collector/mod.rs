//! Per-group collectors fed by the test-run hooks.

pub mod target_factory;

pub use target_factory::{GroupResult, TargetFactoryCollector};
