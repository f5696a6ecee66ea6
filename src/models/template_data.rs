//! Render-ready input for the model templates.
//!
//! A [`TemplateData`] value is produced once per generation run by
//! [`crate::services::assembler::assemble`] and never mutated afterwards.
//! It is the only thing handed to the rendering step.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::constants::{REGULAR_KEY_TYPE, THUMB_KEY_COUNT};
use crate::models::keyboard::{GeometryConfig, Layout, Render, ThumbKey, Units};
use crate::models::vector::{Offset, Rotation};
use crate::services::switch_repo::SwitchRepository;

/// Final transform of one key well cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedKeyModifier {
    /// Composed offset
    pub offset: Offset,
    /// Composed rotation
    pub rotation: Rotation,
    /// Key type tag
    #[serde(rename = "type")]
    pub key_type: String,
}

impl ResolvedKeyModifier {
    /// Creates a regular key modifier.
    #[must_use]
    pub fn regular(offset: Offset, rotation: Rotation) -> Self {
        Self {
            offset,
            rotation,
            key_type: REGULAR_KEY_TYPE.to_string(),
        }
    }
}

/// Resolved key matrix, indexed `[column][row]`.
pub type KeyMatrix = Vec<Vec<ResolvedKeyModifier>>;

/// Key well geometry with its resolved key matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateKeywell {
    /// Global tilt of the key well
    pub tilt_angle: f64,
    /// Curvature radius along a column
    pub vertical_radius: f64,
    /// Curvature radius along a row
    pub horizontal_radius: f64,
    /// Offset of the key well centre
    pub center_offset: Offset,
    /// Lip size on the inner edge
    pub inner_lip_size: f64,
    /// Lip size on the outer edge
    pub outer_lip_size: f64,
    /// First column operated by the index finger
    pub index_finger_start_column: usize,
    /// Resolved transforms, `matrix[col][row]`
    pub matrix: KeyMatrix,
}

/// Thumb cluster with exactly [`THUMB_KEY_COUNT`] ordered keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateThumbCluster {
    /// Column the cluster is anchored to
    pub origin_column_index: usize,
    /// Cluster offset
    pub offset: Offset,
    /// Cluster rotation
    pub rotation: Rotation,
    /// Keys in slot order
    pub keys: [ThumbKey; THUMB_KEY_COUNT],
}

/// Immutable render input.
#[derive(Debug, Clone)]
pub struct TemplateData {
    units: Units,
    layout: Layout,
    switch_types: SwitchRepository,
    geometry: GeometryConfig,
    keywell: TemplateKeywell,
    render: Render,
    thumb_cluster: TemplateThumbCluster,
}

impl TemplateData {
    /// Bundles already validated and resolved parts.
    pub(crate) fn new(
        units: Units,
        layout: Layout,
        switch_types: SwitchRepository,
        geometry: GeometryConfig,
        keywell: TemplateKeywell,
        render: Render,
        thumb_cluster: TemplateThumbCluster,
    ) -> Self {
        Self {
            units,
            layout,
            switch_types,
            geometry,
            keywell,
            render,
            thumb_cluster,
        }
    }

    /// Unit system (always mm/deg).
    #[must_use]
    pub const fn units(&self) -> &Units {
        &self.units
    }

    /// Key matrix dimensions.
    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Specialized switch modules keyed by switch type name.
    #[must_use]
    pub const fn switch_types(&self) -> &SwitchRepository {
        &self.switch_types
    }

    /// Case geometry constants.
    #[must_use]
    pub const fn geometry(&self) -> &GeometryConfig {
        &self.geometry
    }

    /// Key well geometry and resolved matrix.
    #[must_use]
    pub const fn keywell(&self) -> &TemplateKeywell {
        &self.keywell
    }

    /// Render options.
    #[must_use]
    pub const fn render(&self) -> Render {
        self.render
    }

    /// Normalized thumb cluster.
    #[must_use]
    pub const fn thumb_cluster(&self) -> &TemplateThumbCluster {
        &self.thumb_cluster
    }

    /// Names of all declared switch types, sorted.
    #[must_use]
    pub fn switch_type_names(&self) -> Vec<&str> {
        self.switch_types.names().collect()
    }

    /// Footprint source files to include, one per switch type in name order.
    #[must_use]
    pub fn switch_includes(&self) -> Vec<&str> {
        self.switch_types
            .iter()
            .map(|(_, module)| module.filename.as_str())
            .collect()
    }
}

impl Serialize for TemplateData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TemplateData", 9)?;
        state.serialize_field("units", &self.units)?;
        state.serialize_field("layout", &self.layout)?;
        state.serialize_field("switch_types", &self.switch_types)?;
        state.serialize_field("all_switch_types", &self.switch_type_names())?;
        state.serialize_field("all_switch_includes", &self.switch_includes())?;
        state.serialize_field("geometry", &self.geometry)?;
        state.serialize_field("keywell", &self.keywell)?;
        state.serialize_field("render", &self.render)?;
        state.serialize_field("thumb_cluster", &self.thumb_cluster)?;
        state.end()
    }
}
