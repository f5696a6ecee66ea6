//! End-to-end tests for `typemon clear-artefacts` command.

use std::fs;
use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the typemon binary
fn typemon_bin() -> &'static str {
    env!("CARGO_BIN_EXE_typemon")
}

#[test]
fn test_generate_then_clear() {
    let project = TestProject::new();
    let root = project.root().to_str().unwrap();

    let output = Command::new(typemon_bin())
        .args(["generate", "--root", root])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));
    assert!(project.paths.template_data_file("default").exists());

    fs::create_dir_all(project.paths.render_dir()).unwrap();
    fs::write(project.paths.render_dir().join("default.left.g.stl"), "").unwrap();
    fs::write(project.paths.out_dir().join("case.scad"), "").unwrap();

    let output = Command::new(typemon_bin())
        .args(["clear-artefacts", "--root", root])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Removed 2"));

    assert!(!project.paths.template_data_file("default").exists());
    assert!(project.paths.out_dir().join("case.scad").exists());
    assert!(project
        .paths
        .switch_assets_dir()
        .join("choc_v1.scad")
        .exists());
}

#[test]
fn test_clear_without_out_dir_fails() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    let output = Command::new(typemon_bin())
        .args(["clear-artefacts", "--root", temp_dir.path().to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}
