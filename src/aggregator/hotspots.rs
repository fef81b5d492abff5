//! Attribute factory creations to the source locations that caused them.
//!
//! For each expensive factory we count how often its name shows up in the
//! stack samples, grouped by the sample's location. Every occurrence counts,
//! so a factory built recursively three times in one stack adds three to
//! that stack's location.

use super::ranking::{rank_weighted, Ranked};
use crate::snapshot::{FactoryStat, StackSample};
use log::debug;

/// Occurrence count of one factory at one location
pub type LocationCount = Ranked<String>;

/// Every location responsible for a factory's creations, most frequent first
#[derive(Debug, Clone, PartialEq)]
pub struct LocationReport {
    pub factory: String,
    pub locations: Vec<LocationCount>,
}

impl LocationReport {
    /// Total occurrences across all locations
    pub fn total(&self) -> u64 {
        self.locations.iter().map(|l| l.weight).sum()
    }
}

/// Hotspot breakdown for one ranked factory
#[derive(Debug, Clone, PartialEq)]
pub struct FactoryHotspots {
    /// 1-indexed rank by total time
    pub rank: usize,

    pub factory: String,

    /// The first `location_limit` entries of the full report
    pub top_locations: Vec<LocationCount>,

    /// How many locations were asked for
    pub location_limit: usize,

    /// Occurrences in the listed locations
    pub top_sum: u64,

    /// Occurrences everywhere
    pub sum: u64,
}

impl FactoryHotspots {
    /// Share of occurrences covered by the listed locations, rounded to a
    /// whole percent. Zero when the factory never appeared in a stack.
    pub fn percentage(&self) -> u64 {
        if self.sum == 0 {
            0
        } else {
            (100.0 * self.top_sum as f64 / self.sum as f64).round() as u64
        }
    }
}

/// Group one factory's stack occurrences by location
pub fn aggregate_locations(factory: &str, stacks: &[StackSample]) -> LocationReport {
    let entries = stacks.iter().filter_map(|sample| {
        match sample.occurrences_of(factory) {
            0 => None,
            count => Some((sample.location().to_string(), count)),
        }
    });

    LocationReport {
        factory: factory.to_string(),
        locations: rank_weighted(entries),
    }
}

/// Build hotspot breakdowns for already-ranked factories
///
/// # Arguments
/// * `ranked` - factories in rank order (see [`super::stats::rank`])
/// * `stacks` - raw stack samples
/// * `top_factories` - how many ranked factories to analyze
/// * `top_locations_limit` - how many locations to keep per factory
pub fn analyze_hotspots(
    ranked: &[&FactoryStat],
    stacks: &[StackSample],
    top_factories: usize,
    top_locations_limit: usize,
) -> Vec<FactoryHotspots> {
    debug!(
        "Analyzing location hotspots for {} factories over {} stack samples",
        ranked.len().min(top_factories),
        stacks.len()
    );

    ranked
        .iter()
        .take(top_factories)
        .enumerate()
        .map(|(index, stat)| {
            let report = aggregate_locations(stat.name(), stacks);
            let sum = report.total();
            let top_locations: Vec<LocationCount> =
                report.locations.into_iter().take(top_locations_limit).collect();
            let top_sum = top_locations.iter().map(|l| l.weight).sum();

            FactoryHotspots {
                rank: index + 1,
                factory: report.factory,
                top_locations,
                location_limit: top_locations_limit,
                top_sum,
                sum,
            }
        })
        .collect()
}
