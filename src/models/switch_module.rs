//! Switch module (hardware footprint) definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value of a named extra argument substituted into a footprint template.
///
/// Any YAML scalar or structure is accepted.
pub type ExtraArgValue = serde_json::Value;

/// Named extra arguments, ordered by name.
pub type ExtraArgs = BTreeMap<String, ExtraArgValue>;

/// Minimum keycap envelope a switch footprint needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinKeycapSize {
    /// Width in millimetres
    pub width: f64,
    /// Height in millimetres
    pub height: f64,
    /// Depth in millimetres
    pub depth: f64,
}

/// Reusable hardware footprint for one kind of keyboard switch.
///
/// # Validation
///
/// - `filename` and `module` must be non-empty
/// - `filename` must exist under the switch assets directory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwitchModuleDefinition {
    /// Footprint source file, relative to the switch assets directory
    #[serde(default)]
    pub filename: String,
    /// Module identifier inside `filename`
    #[serde(default)]
    pub module: String,
    /// Minimum keycap envelope (zero when unspecified)
    #[serde(default)]
    pub min_keycap_size: MinKeycapSize,
    /// Extra arguments passed to the module
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_args: ExtraArgs,
}

impl SwitchModuleDefinition {
    /// Creates a definition without keycap envelope or extra arguments.
    pub fn new(filename: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            module: module.into(),
            min_keycap_size: MinKeycapSize::default(),
            extra_args: ExtraArgs::new(),
        }
    }

    /// Adds an extra argument.
    #[must_use]
    pub fn with_extra_arg(mut self, key: impl Into<String>, value: ExtraArgValue) -> Self {
        self.extra_args.insert(key.into(), value);
        self
    }

    /// Returns true if the module declares extra argument `key`.
    #[must_use]
    pub fn declares_arg(&self, key: &str) -> bool {
        self.extra_args.contains_key(key)
    }
}
