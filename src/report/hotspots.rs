//! Per-factory location hotspot text.

use super::sink::ReportSink;
use crate::aggregator::FactoryHotspots;

/// Render the hotspot block of one factory
///
/// ```text
/// Top-1: user
/// 85% potential in top-10 specs (11 / 13)
/// user creation by location:
/// 2 => spec/models/user_spec.rb:12
/// ...
/// ```
pub fn format_factory_hotspots(hotspots: &FactoryHotspots) -> String {
    let mut lines = vec![
        format!("Top-{}: {}", hotspots.rank, hotspots.factory),
        format!(
            "{}% potential in top-{} specs ({} / {})",
            hotspots.percentage(),
            hotspots.location_limit,
            hotspots.top_sum,
            hotspots.sum
        ),
        format!("{} creation by location:", hotspots.factory),
    ];

    lines.extend(
        hotspots
            .top_locations
            .iter()
            .map(|location| format!("{} => {}", location.weight, location.key)),
    );

    lines.join("\n")
}

/// Hand every factory's hotspot block to the sink, in rank order
pub fn print_hotspot_report(sink: &mut dyn ReportSink, hotspots: &[FactoryHotspots]) {
    for factory in hotspots {
        sink.info(&format_factory_hotspots(factory));
    }
}
