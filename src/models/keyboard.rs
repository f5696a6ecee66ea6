//! Keyboard configuration tree as declared in a config YAML file.
//!
//! These structures mirror the file format one-to-one. They carry no
//! resolution logic; see [`crate::services`] for that.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::REGULAR_KEY_TYPE;
use crate::models::switch_module::ExtraArgs;
use crate::models::vector::{Offset, Rotation};

/// Root of a keyboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Unit system of all numeric values
    pub units: Units,
    /// Key matrix dimensions
    pub layout: Layout,
    /// Case geometry constants
    pub geometry: GeometryConfig,
    /// Named switch types available to keys
    pub switch_types: BTreeMap<String, SwitchTypeConfig>,
    /// Key well geometry and modifiers
    pub keywell: Keywell,
    /// Thumb cluster placement
    pub thumb_cluster: ThumbCluster,
    /// Render options
    pub render: Render,
}

/// Unit system declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Units {
    /// Length unit (only "mm" is supported)
    pub length: String,
    /// Angle unit (only "deg" is supported)
    pub angle: String,
}

impl Units {
    /// Creates a unit declaration.
    pub fn new(length: impl Into<String>, angle: impl Into<String>) -> Self {
        Self {
            length: length.into(),
            angle: angle.into(),
        }
    }
}

/// Key matrix dimensions of one hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl Layout {
    /// Creates a layout.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

/// Case geometry constants passed straight to the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Switch plate thickness
    pub plane_thickness: f64,
    /// Radius of the plate supports
    pub support_radius: f64,
    /// Height of the key well above the base
    pub keywell_elevation: f64,
    /// Wall thickness at the base
    pub wall_base_thickness: f64,
    /// Wall centre offset as a percentage of its thickness
    pub wall_center_offset_percent: f64,
}

/// User-declared switch type based on a switch module definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchTypeConfig {
    /// Name of the base switch module
    pub definition: String,
    /// Overrides for extra arguments declared by the base module
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_args: ExtraArgs,
}

impl SwitchTypeConfig {
    /// Creates a switch type without overrides.
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            extra_args: ExtraArgs::new(),
        }
    }
}

/// Key well geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keywell {
    /// Global tilt of the key well
    pub tilt_angle: f64,
    /// Curvature radius along a row
    pub horizontal_radius: f64,
    /// Curvature radius along a column
    pub vertical_radius: f64,
    /// Offset of the key well centre
    pub center_offset: Offset,
    /// Lip size on the inner edge
    pub inner_lip_size: f64,
    /// Lip size on the outer edge
    pub outer_lip_size: f64,
    /// First column operated by the index finger
    pub index_finger_start_column: usize,
    /// Per-finger, per-column and per-row adjustments
    pub modifiers: KeywellModifiers,
}

/// Layered geometric overrides for the key well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywellModifiers {
    /// Per-finger defaults
    pub finger: FingerModifiers,
    /// Sparse per-row overrides keyed by row index
    pub rows: BTreeMap<usize, RowColumnModifier>,
    /// Sparse per-column overrides keyed by column index
    pub columns: BTreeMap<usize, RowColumnModifier>,
    /// Per-key overrides (parsed, not applied by resolution)
    pub matrix: Vec<MatrixModifier>,
}

/// One slot per finger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerModifiers {
    /// Index finger
    pub index: FingerModifier,
    /// Middle finger
    pub middle: FingerModifier,
    /// Ring finger
    pub ring: FingerModifier,
    /// Pinky finger
    pub pinky: FingerModifier,
}

/// Offset and tilt applied to every key of one finger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerModifier {
    /// Positional offset
    pub offset: Offset,
    /// Tilt around X
    pub tilt: f64,
}

/// Offset and tilt applied to one row or column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowColumnModifier {
    /// Positional offset
    pub offset: Offset,
    /// Tilt (X for columns, Y for rows)
    pub tilt: f64,
}

impl RowColumnModifier {
    /// Creates a modifier.
    #[must_use]
    pub const fn new(offset: Offset, tilt: f64) -> Self {
        Self { offset, tilt }
    }
}

/// Per-key override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixModifier {
    /// Column index
    pub column: usize,
    /// Row index
    pub row: usize,
    /// Positional offset
    pub offset: Offset,
    /// Rotation
    pub rotation: Rotation,
    /// Skip the finger layer for this key
    pub ignore_finger_modifiers: bool,
    /// Skip the column layer for this key
    pub ignore_column_modifiers: bool,
    /// Skip the row layer for this key
    pub ignore_row_modifiers: bool,
    /// Switch type override
    pub switch_type: String,
}

/// Thumb cluster placement and its sparse key overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbCluster {
    /// Column the cluster is anchored to
    pub origin_column_index: usize,
    /// Cluster offset
    pub offset: Offset,
    /// Cluster rotation
    pub rotation: Rotation,
    /// Key overrides keyed by slot index
    pub keys: BTreeMap<usize, ThumbKey>,
}

/// One thumb key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbKey {
    /// Offset relative to the cluster origin
    pub offset: Offset,
    /// Rotation relative to the cluster
    pub rotation: Rotation,
    /// Key type tag
    #[serde(rename = "type")]
    pub key_type: String,
}

impl ThumbKey {
    /// Creates a thumb key of the regular type.
    #[must_use]
    pub fn new(offset: Offset, rotation: Rotation) -> Self {
        Self {
            offset,
            rotation,
            key_type: REGULAR_KEY_TYPE.to_string(),
        }
    }
}

impl Default for ThumbKey {
    fn default() -> Self {
        Self::new(Offset::default(), Rotation::default())
    }
}

/// Render options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Render {
    /// Fragment count for curved surfaces
    #[serde(rename = "$fn")]
    pub fragments: u32,
    /// Render debug helpers
    pub debug: bool,
}
