//! Application-wide constants.
//!
//! This module defines the application name, the on-disk project layout
//! conventions and a few fixed properties of the keyboard model.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Typemon";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "typemon";

/// Config name used when `--config` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "default";

/// Directory (relative to the project root) holding keyboard configs.
pub const CONFIG_DIR: &str = "configs";

/// Directory (relative to the project root) holding switch module definitions.
pub const SWITCH_DEFINITIONS_DIR: &str = "configs/switches";

/// Directory holding generated model sources.
pub const OUT_DIR: &str = "scad";

/// Directory (relative to [`OUT_DIR`]) holding switch footprint sources.
pub const SWITCH_ASSETS_DIR: &str = "modules/switches";

/// Directory holding rendered models.
pub const RENDER_DIR: &str = "models";

/// Extension of keyboard config and switch definition files.
pub const CONFIG_EXTENSION: &str = "yml";

/// Marker inserted before the extension of every generated artefact.
pub const GENERATED_MARKER: &str = ".g";

/// Extensions of generated artefacts in [`OUT_DIR`].
pub const OUT_EXTENSIONS: [&str; 2] = ["scad", "json"];

/// Extension of rendered models in [`RENDER_DIR`].
pub const RENDER_EXTENSION: &str = "stl";

/// Number of keys in a thumb cluster.
pub const THUMB_KEY_COUNT: usize = 3;

/// Key type tag used for every key that does not declare one.
pub const REGULAR_KEY_TYPE: &str = "regular";

/// Only supported length unit.
pub const LENGTH_UNIT: &str = "mm";

/// Only supported angle unit.
pub const ANGLE_UNIT: &str = "deg";
