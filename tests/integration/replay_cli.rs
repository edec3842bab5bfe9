//! CLI tests: replay and check against recorded delta files.

use super::test_utils::delta_file;
use machine_model::cli::{Commands, OutputMode, RunContext};
use machine_model::config::Settings;
use std::process::Command;

const SESSION: &[&str] = &[
    "# captured from a coreXY printer",
    r#"{"state": {"status": "idle", "currentTool": 0}, "move": {"kinematics": {"name": "coreXY"}}}"#,
    r#"{"tools": [{"number": 0, "name": "hotend"}], "heat": {"heaters": [{"max": 285}]}}"#,
    "",
    r#"{"job": {"filePosition": 512, "file": {"size": 2048}}}"#,
];

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_machine-model"))
        .env("MACHINE_MODEL_LOG", "off")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_replay_prints_summary_table() {
    let file = delta_file(SESSION);
    let output = run(&["replay", file.path().to_str().unwrap()]);

    assert!(
        output.status.success(),
        "replay should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("coreXY"));
    assert!(stdout.contains("T0 (hotend)"));
    assert!(stdout.contains("25.0%"));
}

#[test]
fn test_replay_model_output_is_json() {
    let file = delta_file(SESSION);
    let output = run(&["replay", file.path().to_str().unwrap(), "--output", "model"]);
    assert!(output.status.success());

    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tree["state"]["status"], "idle");
    assert_eq!(tree["move"]["kinematics"]["name"], "coreXY");
    assert_eq!(tree["job"]["file"]["size"], 2048);
}

#[test]
fn test_check_fails_on_bad_delta() {
    let file = delta_file(&[
        r#"{"state": {"status": "idle"}}"#,
        r#"{"state": {"status": 7}}"#,
    ]);
    let output = run(&["check", file.path().to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1 of 2 deltas failed"));
    assert!(stderr.contains("state.status"));
}

#[test]
fn test_strict_replay_reports_line_number() {
    let file = delta_file(&[
        r#"{"state": {"status": "idle"}}"#,
        r#"{"fans": {"0": {}}}"#,
        r#"{"state": {"status": "busy"}}"#,
    ]);
    let context = RunContext::with_settings(Settings::default());
    let err = context
        .execute(&Commands::Replay {
            file: file.path().to_path_buf(),
            strict: true,
            output: OutputMode::Summary,
        })
        .unwrap_err();
    assert!(err.to_string().starts_with("Line 2:"));
}

#[test]
fn test_missing_file_is_reported() {
    let context = RunContext::with_settings(Settings::default());
    let result = context.execute(&Commands::Check {
        file: "/nonexistent/deltas.ndjson".into(),
    });
    assert!(result.is_err());
}
