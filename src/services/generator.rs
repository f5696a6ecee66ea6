//! Generation runs.
//!
//! A [`Generator`] loads one keyboard config and the switch module
//! repository from a project tree, assembles the render input and writes it
//! next to the generated model sources. Every run starts from scratch.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::{is_generated_artefact, ProjectPaths};
use crate::constants::{OUT_EXTENSIONS, RENDER_EXTENSION};
use crate::models::keyboard::KeyboardConfig;
use crate::models::template_data::TemplateData;
use crate::parser::config_file::load_keyboard_config;
use crate::services::assembler::assemble;
use crate::services::switch_repo::SwitchRepository;

/// Loaded inputs of one generation run.
#[derive(Debug)]
pub struct Generator {
    paths: ProjectPaths,
    name: String,
    config: KeyboardConfig,
    switches: SwitchRepository,
}

impl Generator {
    /// Loads config `name` and all switch modules of the project.
    pub fn new(paths: ProjectPaths, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let config =
            load_keyboard_config(&paths.config_file(&name)).context("failed to load config")?;
        let switches = SwitchRepository::load(
            &paths.switch_definitions_dir(),
            &paths.switch_assets_dir(),
        )
        .context("failed to load switches")?;

        Ok(Self {
            paths,
            name,
            config,
            switches,
        })
    }

    /// Config name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Loaded switch modules.
    #[must_use]
    pub const fn switches(&self) -> &SwitchRepository {
        &self.switches
    }

    /// Validates the config and resolves it into template data.
    pub fn template_data(&self) -> Result<TemplateData> {
        assemble(&self.config, &self.switches).context("failed to create template data")
    }

    /// Assembles template data and writes it as JSON to the output directory.
    ///
    /// Returns the written path.
    pub fn generate(&self) -> Result<PathBuf> {
        let data = self.template_data()?;
        let json = render_json(&data)?;

        self.paths.ensure_out_dir()?;
        let path = self.paths.template_data_file(&self.name);
        fs::write(&path, json)
            .with_context(|| format!("Failed to write template data: {}", path.display()))?;

        info!(config = %self.name, path = %path.display(), "generated successfully");
        Ok(path)
    }
}

/// Serializes template data as pretty JSON.
pub fn render_json(data: &TemplateData) -> Result<String> {
    serde_json::to_string_pretty(data).context("Failed to serialize template data")
}

/// Removes generated artefacts from the output and render directories.
///
/// A missing render directory is skipped; a missing output directory is an
/// error. Returns the number of removed files.
pub fn clear_artefacts(paths: &ProjectPaths) -> Result<usize> {
    let mut removed = remove_generated(&paths.out_dir(), &OUT_EXTENSIONS)
        .context("Failed to clear output directory")?;

    let render_dir = paths.render_dir();
    if render_dir.is_dir() {
        removed += remove_generated(&render_dir, &[RENDER_EXTENSION])
            .context("Failed to clear render directory")?;
    } else {
        info!(dir = %render_dir.display(), "models directory not found, skipping");
    }

    Ok(removed)
}

fn remove_generated(dir: &Path, extensions: &[&str]) -> Result<usize> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut removed = 0;
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        let is_artefact = path.is_file()
            && path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| is_generated_artefact(name, extensions));

        if is_artefact {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove file: {}", path.display()))?;
            debug!(path = %path.display(), "removed artefact");
            removed += 1;
        }
    }

    Ok(removed)
}
