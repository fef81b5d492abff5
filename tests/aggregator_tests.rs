use factory_prof::aggregator::{analyze_hotspots, rank, summarize, top_factories};
use factory_prof::report::{format_simple_report, print_hotspot_report, BufferSink};
use factory_prof::snapshot::{FactoryStat, StackSample};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn stats() -> Vec<FactoryStat> {
    vec![
        FactoryStat::new("post", 4, 2, 0.8, 0.4).unwrap(),
        FactoryStat::new("user", 10, 5, 2.0, 1.0).unwrap(),
        FactoryStat::new("account", 6, 0, 0.8, 0.0).unwrap(),
        FactoryStat::new("comment", 1, 1, 0.1, 0.1).unwrap(),
    ]
}

fn sample(stack: &[&str], location: &str) -> StackSample {
    StackSample::new(stack.iter().copied(), location).unwrap()
}

#[test]
fn test_summary_totals() {
    let stats = stats();
    let summary = summarize(&stats);

    assert_eq!(summary.total_count, stats.iter().map(|s| s.total_count()).sum::<u64>());
    assert_eq!(summary.total_count, 21);
    assert_eq!(summary.total_top_level_count, 8);
    assert!(summary.total_top_level_count <= summary.total_count);
    assert!((summary.total_time - 3.7).abs() < 1e-9);
    assert_eq!(summary.uniq_factory_count, 4);
}

#[test]
fn test_rank_is_sorted_descending() {
    let stats = stats();
    let ranked = rank(&stats);

    for pair in ranked.windows(2) {
        assert!(pair[0].total_time() >= pair[1].total_time());
    }

    // post and account tie at 0.8; input order wins
    let names: Vec<&str> = ranked.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["user", "post", "account", "comment"]);
}

#[test]
fn test_rank_does_not_touch_input() {
    let stats = stats();
    let before = stats.clone();
    let _ = rank(&stats);
    assert_eq!(stats, before);
}

#[test]
fn test_single_factory_report() {
    let stats = vec![FactoryStat::new("user", 10, 5, 2.0, 1.0).unwrap()];
    let ranked = top_factories(&stats, 10);
    let text = format_simple_report(&ranked, &summarize(&stats), Duration::from_secs_f64(3.0));

    let expected = "Factories usage\n\
                    \n \
                    Total: 10\n \
                    Total top-level: 5\n \
                    Total time: 2.0000s (out of ~3.0000s)\n \
                    Total uniq factories: 1\n\
                    \n   \
                    total time    time per 1000    total   top-level       top-level time               name\n\
                    \n\
                    \x20          2.0000s      200.0000s       10           5             1.0000s               user";

    assert_eq!(text, expected);
}

#[test]
fn test_hotspot_report_for_ranked_factories() {
    let stats = stats();
    let stacks = vec![
        sample(&["user"], "spec/models/user_spec.rb:5"),
        sample(&["post", "user"], "spec/models/post_spec.rb:9"),
        sample(&["post", "user"], "spec/models/post_spec.rb:9"),
        sample(&["account", "user", "user"], "spec/models/account_spec.rb:2"),
        sample(&["comment", "post", "user"], "spec/models/comment_spec.rb:7"),
    ];

    let hotspots = analyze_hotspots(&rank(&stats), &stacks, 10, 10);

    assert_eq!(hotspots.len(), 4);
    let user = &hotspots[0];
    assert_eq!(user.factory, "user");
    assert_eq!(user.sum, 6);
    assert_eq!(user.top_sum, 6);
    assert_eq!(user.top_locations[0].key, "spec/models/post_spec.rb:9");
    assert_eq!(user.top_locations[0].weight, 2);
    // ties at 2 keep first-seen order; the 1s follow
    assert_eq!(user.top_locations[1].key, "spec/models/account_spec.rb:2");
    assert_eq!(user.top_locations[2].key, "spec/models/user_spec.rb:5");

    let mut sink = BufferSink::new();
    print_hotspot_report(&mut sink, &hotspots);

    assert_eq!(sink.messages.len(), 4);
    assert_eq!(
        sink.messages[0],
        "Top-1: user\n\
         100% potential in top-10 specs (6 / 6)\n\
         user creation by location:\n\
         2 => spec/models/post_spec.rb:9\n\
         2 => spec/models/account_spec.rb:2\n\
         1 => spec/models/user_spec.rb:5\n\
         1 => spec/models/comment_spec.rb:7"
    );
    assert!(sink.messages[1].starts_with("Top-2: post\n"));
}

#[test]
fn test_hotspot_percentage_matches_rounding() {
    let stats = vec![FactoryStat::new("user", 30, 30, 1.0, 1.0).unwrap()];
    let stacks: Vec<StackSample> = (0..30)
        .map(|i| sample(&["user"], &format!("spec/s_spec.rb:{}", i % 15)))
        .collect();

    let hotspots = analyze_hotspots(&rank(&stats), &stacks, 10, 10);
    let user = &hotspots[0];

    assert_eq!(user.sum, 30);
    assert_eq!(user.top_sum, 20);
    assert!(user.top_sum <= user.sum);
    assert_eq!(user.percentage(), (100.0 * 20.0_f64 / 30.0).round() as u64);
    assert_eq!(user.percentage(), 67);
}
