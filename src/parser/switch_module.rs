//! Switch module definition files.
//!
//! Each `<name>.yml` file in the definitions directory describes one switch
//! module; the file stem becomes the module name.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::constants::CONFIG_EXTENSION;
use crate::models::switch_module::SwitchModuleDefinition;

/// Parses a single switch module definition file.
pub fn load_switch_module(path: &Path) -> Result<SwitchModuleDefinition> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read switch module file: {}", path.display()))?;

    serde_yml::from_str(&content)
        .with_context(|| format!("Failed to parse switch module: {}", path.display()))
}

/// Parses every definition file in `dir`.
///
/// Sub-directories and files without the `.yml` extension are ignored.
/// Results are sorted by module name.
pub fn load_switch_modules(dir: &Path) -> Result<Vec<(String, SwitchModuleDefinition)>> {
    let entries = fs::read_dir(dir).with_context(|| {
        format!("Failed to read switch modules directory: {}", dir.display())
    })?;

    let mut modules = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some(CONFIG_EXTENSION) {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };

        let module = load_switch_module(&path)?;
        modules.push((name.to_string(), module));
    }

    modules.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(modules)
}
