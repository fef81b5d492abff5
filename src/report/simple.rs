//! Ranked factory usage table.

use super::sink::ReportSink;
use crate::aggregator::StatsSummary;
use crate::snapshot::FactoryStat;
use std::time::Duration;

/// Column header of the usage table
pub const TABLE_HEADER: &str =
    "   total time    time per 1000    total   top-level       top-level time               name";

/// Render seconds with the report's fixed precision
pub fn format_seconds(seconds: f64) -> String {
    format!("{:.4}s", seconds)
}

/// One table row for a factory
pub fn format_row(stat: &FactoryStat) -> String {
    format!(
        "{:>17.4}s {:>13.4}s {:>8} {:>11} {:>18.4}s {:>18}",
        stat.total_time(),
        stat.time_per_thousand(),
        stat.total_count(),
        stat.top_level_count(),
        stat.top_level_time(),
        stat.name()
    )
}

/// Render the usage summary followed by one row per ranked factory
///
/// # Arguments
/// * `ranked` - factories to list, already ranked and truncated
/// * `summary` - run totals over all factories
/// * `elapsed` - wall time since the run started
pub fn format_simple_report(
    ranked: &[&FactoryStat],
    summary: &StatsSummary,
    elapsed: Duration,
) -> String {
    let mut lines = vec![
        "Factories usage".to_string(),
        String::new(),
        format!(" Total: {}", summary.total_count),
        format!(" Total top-level: {}", summary.total_top_level_count),
        format!(
            " Total time: {} (out of ~{})",
            format_seconds(summary.total_time),
            format_seconds(elapsed.as_secs_f64())
        ),
        format!(" Total uniq factories: {}", summary.uniq_factory_count),
        String::new(),
        TABLE_HEADER.to_string(),
        String::new(),
    ];

    lines.extend(ranked.iter().map(|stat| format_row(stat)));

    lines.join("\n")
}

/// Render the usage summary and hand it to the sink
pub fn print_simple_report(
    sink: &mut dyn ReportSink,
    ranked: &[&FactoryStat],
    summary: &StatsSummary,
    elapsed: Duration,
) {
    sink.info(&format_simple_report(ranked, summary, elapsed));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{rank, summarize};
    use crate::report::sink::BufferSink;

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(2.0), "2.0000s");
        assert_eq!(format_seconds(0.123456), "0.1235s");
    }

    #[test]
    fn test_row_layout() {
        let stat = FactoryStat::new("user", 10, 5, 2.0, 1.0).unwrap();
        let row = format_row(&stat);

        assert_eq!(
            row,
            "           2.0000s      200.0000s       10           5             1.0000s               user"
        );
    }

    #[test]
    fn test_row_without_top_level_creations() {
        let stat = FactoryStat::new("account", 3, 0, 0.5, 0.0).unwrap();
        let row = format_row(&stat);
        assert!(row.contains("       0.0000s "));
    }

    #[test]
    fn test_print_simple_report() {
        let stats = vec![FactoryStat::new("user", 10, 5, 2.0, 1.0).unwrap()];
        let ranked = rank(&stats);
        let summary = summarize(&stats);
        let mut sink = BufferSink::new();

        print_simple_report(&mut sink, &ranked, &summary, Duration::from_secs(3));

        assert_eq!(sink.messages.len(), 1);
        let text = &sink.messages[0];
        assert!(text.starts_with("Factories usage\n"));
        assert!(text.contains(" Total: 10\n"));
        assert!(text.contains(" Total top-level: 5\n"));
        assert!(text.contains(" Total time: 2.0000s (out of ~3.0000s)\n"));
        assert!(text.contains(" Total uniq factories: 1\n"));
        assert!(text.contains(&format!("{}\n\n", TABLE_HEADER)));
        assert!(text.ends_with("user"));
    }

    #[test]
    fn test_blank_line_between_header_and_rows() {
        let stats = vec![
            FactoryStat::new("user", 10, 5, 2.0, 1.0).unwrap(),
            FactoryStat::new("post", 2, 2, 0.5, 0.5).unwrap(),
        ];
        let mut sink = BufferSink::new();

        print_simple_report(&mut sink, &rank(&stats), &summarize(&stats), Duration::from_secs(3));

        let contents = sink.contents();
        let lines: Vec<&str> = contents.lines().collect();
        let header = lines.iter().position(|line| *line == TABLE_HEADER).unwrap();
        assert_eq!(lines[header + 1], "");
        assert!(lines[header + 2].ends_with("user"));
        assert!(lines[header + 3].ends_with("post"));
        assert_eq!(lines.len(), header + 4);
    }
}
