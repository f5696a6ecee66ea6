//! End-to-end tests for `typemon switches` command.

use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the typemon binary
fn typemon_bin() -> &'static str {
    env!("CARGO_BIN_EXE_typemon")
}

#[test]
fn test_switches_json() {
    let project = TestProject::new();

    let output = Command::new(typemon_bin())
        .args([
            "switches",
            "--root",
            project.root().to_str().unwrap(),
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON output");
    let entries = result.as_array().expect("Should be an array");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], "choc_v1");
    assert_eq!(entries[0]["filename"], "choc_v1.scad");
    assert_eq!(entries[0]["extra_args"], serde_json::json!(["hotswap", "led"]));
    assert_eq!(entries[1]["name"], "mx");
}

#[test]
fn test_switches_skips_definition_without_footprint() {
    let project = TestProject::new();
    project.add_switch("kailh", "filename: kailh.scad\nmodule: kailh_box\n", false);

    let output = Command::new(typemon_bin())
        .args(["switches", "--root", project.root().to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("choc_v1"));
    assert!(!stdout.contains("kailh_box"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to add switch module"));
}

#[test]
fn test_switches_missing_directory() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    let output = Command::new(typemon_bin())
        .args(["switches", "--root", temp_dir.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}
