//! Keyboard configuration files.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::models::keyboard::KeyboardConfig;

/// Reads and parses a keyboard config YAML file.
pub fn load_keyboard_config(path: &Path) -> Result<KeyboardConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_keyboard_config(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parses keyboard config YAML text.
pub fn parse_keyboard_config(content: &str) -> Result<KeyboardConfig> {
    serde_yml::from_str(content).context("Failed to unmarshal yaml")
}
