//! Data models for keyboard configs, switch modules and template data.
//!
//! This module contains the plain data structures shared by the parser and
//! the resolution services.

pub mod keyboard;
pub mod switch_module;
pub mod template_data;
pub mod vector;

// Re-export all model types
pub use keyboard::{
    FingerModifier, FingerModifiers, GeometryConfig, KeyboardConfig, Keywell, KeywellModifiers,
    Layout, MatrixModifier, Render, RowColumnModifier, SwitchTypeConfig, ThumbCluster, ThumbKey,
    Units,
};
pub use switch_module::{ExtraArgValue, ExtraArgs, MinKeycapSize, SwitchModuleDefinition};
pub use template_data::{
    KeyMatrix, ResolvedKeyModifier, TemplateData, TemplateKeywell, TemplateThumbCluster,
};
pub use vector::{combine, Axes, Offset, Rotation};
