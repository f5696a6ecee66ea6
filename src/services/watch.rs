//! Watch mode for generation runs.
//!
//! Watches the selected config file and the switch definitions directory and
//! reruns generation from scratch on every write. A failed run is logged and
//! the watcher keeps going.

use anyhow::{bail, Context, Result};
use notify::event::ModifyKind;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::ProjectPaths;
use crate::services::generator::Generator;

/// Returns true if `event` should trigger a new generation run.
///
/// Content writes and newly created files count; access and metadata-only
/// changes do not.
#[must_use]
pub const fn is_rebuild_event(event: &Event) -> bool {
    matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Any)
    )
}

/// Loads everything from disk and generates config `name` once.
pub fn generate_once(paths: &ProjectPaths, name: &str) -> Result<PathBuf> {
    Generator::new(paths.clone(), name)
        .context("failed to create generator")?
        .generate()
        .context("failed to generate")
}

/// Handles one watcher notification.
///
/// Returns the written path if the event triggered a successful run.
pub fn handle_event(
    paths: &ProjectPaths,
    name: &str,
    event: notify::Result<Event>,
) -> Option<PathBuf> {
    let event = match event {
        Ok(event) => event,
        Err(e) => {
            warn!("watch error: {e}");
            return None;
        }
    };

    if !is_rebuild_event(&event) {
        return None;
    }
    debug!(paths = ?event.paths, "change detected");

    match generate_once(paths, name) {
        Ok(path) => Some(path),
        Err(e) => {
            warn!("failed to generate: {e:#}");
            None
        }
    }
}

/// Blocks and regenerates config `name` on every change.
///
/// Only returns when the watcher cannot be set up or its channel closes.
pub fn watch(paths: &ProjectPaths, name: &str) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).context("failed to create watcher")?;

    let config_file = paths.config_file(name);
    watcher
        .watch(&config_file, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {}", config_file.display()))?;
    let definitions_dir = paths.switch_definitions_dir();
    watcher
        .watch(&definitions_dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {}", definitions_dir.display()))?;

    info!(config = %name, "watching for changes");
    for event in rx {
        handle_event(paths, name, event);
    }

    bail!("watcher closed")
}
