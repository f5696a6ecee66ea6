//! Shared test fixtures for integration and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use typemon::config::ProjectPaths;

/// Keyboard config with a 5×6 layout and one plain switch type.
pub const BASIC_CONFIG: &str = r"
units:
  length: mm
  angle: deg
layout:
  rows: 5
  cols: 6
geometry:
  plane_thickness: 1.5
  support_radius: 1
  keywell_elevation: 20
  wall_base_thickness: 2
  wall_center_offset_percent: 50
switch_types:
  regular:
    definition: choc_v1
keywell:
  tilt_angle: 10
  horizontal_radius: 90
  vertical_radius: 70
  index_finger_start_column: 3
  modifiers:
    finger:
      index: { offset: { y: 1 }, tilt: 2 }
      pinky: { offset: { y: -10, z: 5 }, tilt: 8 }
    columns:
      0: { offset: { x: -1 }, tilt: 1 }
    rows:
      4: { offset: { z: 2 }, tilt: -5 }
thumb_cluster:
  origin_column_index: 1
  offset: { x: -15, y: -40 }
  rotation: { z: 20 }
  keys:
    2: { offset: { x: 3 }, type: wide }
render:
  $fn: 48
";

/// Switch module definition for `choc_v1`.
pub const CHOC_DEFINITION: &str = "filename: choc_v1.scad
module: choc_v1_switch
min_keycap_size:
  width: 17.5
  height: 16.5
extra_args:
  hotswap: true
  led: false
";

/// Switch module definition for `mx`.
pub const MX_DEFINITION: &str = "filename: mx.scad
module: mx_switch
extra_args:
  stabilizer: false
";

/// Temporary project tree with switch definitions, footprints and configs.
pub struct TestProject {
    /// Keeps the directory alive
    pub temp_dir: TempDir,
    /// Resolved project paths
    pub paths: ProjectPaths,
}

impl TestProject {
    /// Creates a project with the `choc_v1` and `mx` switch modules and the
    /// basic config saved as `default`.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let paths = ProjectPaths::new(temp_dir.path());

        fs::create_dir_all(paths.switch_definitions_dir()).unwrap();
        fs::create_dir_all(paths.switch_assets_dir()).unwrap();

        let project = Self { temp_dir, paths };
        project.add_switch("choc_v1", CHOC_DEFINITION, true);
        project.add_switch("mx", MX_DEFINITION, true);
        project.write_config("default", BASIC_CONFIG);
        project
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes a switch definition and, if `with_asset`, its footprint file.
    pub fn add_switch(&self, name: &str, definition: &str, with_asset: bool) {
        fs::write(
            self.paths.switch_definitions_dir().join(format!("{name}.yml")),
            definition,
        )
        .unwrap();

        if with_asset {
            let parsed: serde_yml::Value = serde_yml::from_str(definition).unwrap();
            if let Some(filename) = parsed["filename"].as_str() {
                fs::write(self.paths.switch_assets_dir().join(filename), "// footprint").unwrap();
            }
        }
    }

    /// Writes `configs/<name>.yml`.
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.paths.config_file(name);
        fs::write(&path, content).unwrap();
        path
    }
}

/// Basic config with `layout` replaced.
pub fn config_with_layout(rows: usize, cols: usize) -> String {
    BASIC_CONFIG.replace(
        "layout:\n  rows: 5\n  cols: 6",
        &format!("layout:\n  rows: {rows}\n  cols: {cols}"),
    )
}

/// Basic config whose `regular` switch type references `definition`.
pub fn config_with_definition(definition: &str) -> String {
    BASIC_CONFIG.replace(
        "definition: choc_v1",
        &format!("definition: {definition}"),
    )
}
