//! Project directory configuration.
//!
//! This module resolves where keyboard configs, switch module definitions,
//! footprint assets and generated artefacts live relative to a project root.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_DIR, CONFIG_EXTENSION, GENERATED_MARKER, OUT_DIR, RENDER_DIR, SWITCH_ASSETS_DIR,
    SWITCH_DEFINITIONS_DIR,
};

/// File system locations of one typemon project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    /// Creates project paths rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory containing keyboard configs.
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.root.join(CONFIG_DIR)
    }

    /// Path of the keyboard config named `name` (without extension).
    ///
    /// - `default` → `configs/default.yml`
    #[must_use]
    pub fn config_file(&self, name: &str) -> PathBuf {
        self.config_dir().join(format!("{name}.{CONFIG_EXTENSION}"))
    }

    /// Directory containing switch module definitions.
    #[must_use]
    pub fn switch_definitions_dir(&self) -> PathBuf {
        self.root.join(SWITCH_DEFINITIONS_DIR)
    }

    /// Directory that switch module `filename` references are resolved against.
    #[must_use]
    pub fn switch_assets_dir(&self) -> PathBuf {
        self.out_dir().join(SWITCH_ASSETS_DIR)
    }

    /// Directory receiving generated model sources.
    #[must_use]
    pub fn out_dir(&self) -> PathBuf {
        self.root.join(OUT_DIR)
    }

    /// Directory receiving rendered models.
    #[must_use]
    pub fn render_dir(&self) -> PathBuf {
        self.root.join(RENDER_DIR)
    }

    /// Path of the render input generated for config `name`.
    ///
    /// - `default` → `scad/default.config.g.json`
    #[must_use]
    pub fn template_data_file(&self, name: &str) -> PathBuf {
        self.out_dir().join(format!("{name}.config{GENERATED_MARKER}.json"))
    }

    /// Ensures the output directory exists.
    pub fn ensure_out_dir(&self) -> Result<PathBuf> {
        let dir = self.out_dir();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
        Ok(dir)
    }
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Returns true if `file_name` is a generated artefact with one of `extensions`.
///
/// - `left.g.scad` with `["scad"]` → true
/// - `left.scad` with `["scad"]` → false
#[must_use]
pub fn is_generated_artefact(file_name: &str, extensions: &[&str]) -> bool {
    extensions
        .iter()
        .any(|ext| file_name.ends_with(&format!("{GENERATED_MARKER}.{ext}")))
}
