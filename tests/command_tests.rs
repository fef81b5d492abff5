use factory_prof::commands::{execute_report, validate_args, validate_profile_file, ReportArgs};
use factory_prof::session::DumpOutcome;
use serde_json::json;
use std::path::{Path, PathBuf};

fn write_snapshot(dir: &Path, value: serde_json::Value) -> PathBuf {
    let path = dir.join("snapshot.json");
    std::fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();
    path
}

#[test]
fn test_validate_args_valid() {
    let args = ReportArgs {
        input: PathBuf::from("snapshot.json"),
        top_factories: Some(5),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_top_factories_zero() {
    let args = ReportArgs {
        input: PathBuf::from("snapshot.json"),
        top_factories: Some(0),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_report_writes_document() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_snapshot(
        temp_dir.path(),
        json!({
            "started_at": "2024-01-01T12:00:00Z",
            "finished_at": "2024-01-01T12:00:03Z",
            "stats": [
                {"name": "user", "total_count": 10, "top_level_count": 5,
                 "total_time": 2.0, "top_level_time": 1.0},
                {"name": "account", "total_count": 5, "top_level_count": 0,
                 "total_time": 0.5, "top_level_time": 0.0}
            ],
            "stacks": [
                {"stack": ["user", "account"], "location": "spec/models/user_spec.rb:4"},
                {"stack": ["user", "account"], "location": "spec/models/user_spec.rb:4"},
                {"stack": ["user"], "location": "spec/models/user_spec.rb:9"}
            ]
        }),
    );
    let output = temp_dir.path().join("tmp/test_prof/stackprof.json");
    let svg = temp_dir.path().join("tmp/test_prof/stackprof.svg");

    let outcome = execute_report(ReportArgs {
        input,
        output: Some(output.clone()),
        svg: Some(svg.clone()),
        no_launch: true,
        ..Default::default()
    })
    .unwrap();

    assert_eq!(
        outcome,
        DumpOutcome::Written {
            path: output.clone(),
            svg_path: Some(svg.clone()),
            launched: false,
        }
    );
    assert!(svg.exists());

    let stats = validate_profile_file(&output).unwrap();
    assert_eq!(stats.frames, 2);
    assert_eq!(stats.distinct_stacks, 2);
    assert_eq!(stats.samples, 3);
}

#[test]
fn test_report_without_factories() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_snapshot(
        temp_dir.path(),
        json!({ "started_at": "2024-01-01T12:00:00Z", "stats": [], "stacks": [] }),
    );
    let output = temp_dir.path().join("stackprof.json");

    let outcome = execute_report(ReportArgs {
        input,
        output: Some(output.clone()),
        no_launch: true,
        ..Default::default()
    })
    .unwrap();

    assert_eq!(outcome, DumpOutcome::NoData);
    assert!(!output.exists());
}

#[test]
fn test_report_rejects_invalid_snapshot() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_snapshot(
        temp_dir.path(),
        json!({
            "started_at": "2024-01-01T12:00:00Z",
            "stats": [
                {"name": "user", "total_count": 1, "top_level_count": 4,
                 "total_time": 1.0, "top_level_time": 1.0}
            ]
        }),
    );
    let output = temp_dir.path().join("stackprof.json");

    let result = execute_report(ReportArgs {
        input,
        output: Some(output.clone()),
        no_launch: true,
        ..Default::default()
    });

    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn test_report_with_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = temp_dir.path().join("from_config.json");
    let config = temp_dir.path().join("factory_prof.toml");
    std::fs::write(
        &config,
        format!(
            "output_path = {:?}\ntop_factories = 1\nlaunch_viewer = false\n",
            output.display().to_string()
        ),
    )
    .unwrap();
    let input = write_snapshot(
        temp_dir.path(),
        json!({
            "started_at": "2024-01-01T12:00:00Z",
            "stats": [
                {"name": "user", "total_count": 1, "top_level_count": 1,
                 "total_time": 1.0, "top_level_time": 1.0}
            ],
            "stacks": [{"stack": ["user"], "location": "spec/a_spec.rb:1"}]
        }),
    );

    let outcome = execute_report(ReportArgs {
        input,
        config: Some(config),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(
        outcome,
        DumpOutcome::Written {
            path: output.clone(),
            svg_path: None,
            launched: false,
        }
    );
    assert!(output.exists());
}
