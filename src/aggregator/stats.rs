//! Summary and ranking of per-factory statistics.

use crate::snapshot::FactoryStat;
use log::debug;
use std::collections::HashSet;

/// Totals across every factory of a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsSummary {
    /// Creations, nested ones included
    pub total_count: u64,

    /// Creations not nested in another factory
    pub total_top_level_count: u64,

    /// Sum of every factory's total time, in seconds
    pub total_time: f64,

    /// Number of distinct factory names
    pub uniq_factory_count: usize,
}

/// Sum the stats of a run
///
/// Empty input gives the zero summary.
pub fn summarize(stats: &[FactoryStat]) -> StatsSummary {
    let uniq: HashSet<&str> = stats.iter().map(FactoryStat::name).collect();

    StatsSummary {
        total_count: stats.iter().map(FactoryStat::total_count).sum(),
        total_top_level_count: stats.iter().map(FactoryStat::top_level_count).sum(),
        total_time: stats.iter().map(FactoryStat::total_time).sum(),
        uniq_factory_count: uniq.len(),
    }
}

/// Rank stats by total time, most expensive first
///
/// Factories with equal total time keep their input order.
pub fn rank(stats: &[FactoryStat]) -> Vec<&FactoryStat> {
    let mut ranked: Vec<&FactoryStat> = stats.iter().collect();
    ranked.sort_by(|a, b| b.total_time().total_cmp(&a.total_time()));

    debug!("Ranked {} factories by total time", ranked.len());

    ranked
}

/// The `top_n` most expensive factories
pub fn top_factories(stats: &[FactoryStat], top_n: usize) -> Vec<&FactoryStat> {
    let mut ranked = rank(stats);
    ranked.truncate(top_n);
    ranked
}
