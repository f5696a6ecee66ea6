//! Template data assembly.
//!
//! Validates a parsed [`KeyboardConfig`], specializes its switch types
//! against a loaded [`SwitchRepository`] and resolves all key transforms
//! into one immutable [`TemplateData`]. Assembly is all-or-nothing.

use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::{ANGLE_UNIT, LENGTH_UNIT};
use crate::models::keyboard::{KeyboardConfig, Layout, SwitchTypeConfig, Units};
use crate::models::template_data::TemplateData;
use crate::services::keywell::build_template_keywell;
use crate::services::switch_repo::{SwitchRepoError, SwitchRepository};
use crate::services::thumb_cluster;

/// Minimum number of rows (exclusive).
pub const MIN_ROWS: usize = 1;

/// Minimum number of columns (exclusive).
pub const MIN_COLS: usize = 4;

/// Errors raised while assembling template data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    /// Units other than mm/deg
    #[error("failed to validate units: only \"mm\" and \"deg\" are supported, got \"{length}\" and \"{angle}\"")]
    UnsupportedUnits {
        /// Declared length unit
        length: String,
        /// Declared angle unit
        angle: String,
    },
    /// Layout too small for a key well
    #[error("failed to validate layout: {reason} (rows: {rows}, cols: {cols})")]
    InvalidLayout {
        /// Declared rows
        rows: usize,
        /// Declared columns
        cols: usize,
        /// Violated bound
        reason: &'static str,
    },
    /// Switch type without a base module reference
    #[error("failed to validate switch types: switch type definition is required for switch type: {switch_type}")]
    MissingDefinition {
        /// Switch type name
        switch_type: String,
    },
    /// Switch type whose base module could not be resolved or specialized
    #[error("failed to validate switch types: switch type {switch_type}")]
    SwitchType {
        /// Switch type name
        switch_type: String,
        /// Underlying repository failure
        #[source]
        source: SwitchRepoError,
    },
}

impl AssemblyError {
    /// Repository failure at the root of this error, if any.
    #[must_use]
    pub const fn repo_error(&self) -> Option<&SwitchRepoError> {
        match self {
            Self::SwitchType { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Checks that the config uses millimetres and degrees.
pub fn validate_units(units: &Units) -> Result<(), AssemblyError> {
    if units.length != LENGTH_UNIT || units.angle != ANGLE_UNIT {
        return Err(AssemblyError::UnsupportedUnits {
            length: units.length.clone(),
            angle: units.angle.clone(),
        });
    }
    Ok(())
}

/// Checks that the layout has more than one row and more than four columns.
pub fn validate_layout(layout: Layout) -> Result<(), AssemblyError> {
    let reason = if layout.rows <= MIN_ROWS {
        "rows must be greater than 1"
    } else if layout.cols <= MIN_COLS {
        "cols must be greater than 4"
    } else {
        return Ok(());
    };

    Err(AssemblyError::InvalidLayout {
        rows: layout.rows,
        cols: layout.cols,
        reason,
    })
}

/// Specializes every declared switch type into a switch-type-scoped repository.
pub fn resolve_switch_types<'a>(
    switch_types: impl IntoIterator<Item = (&'a String, &'a SwitchTypeConfig)>,
    modules: &SwitchRepository,
) -> Result<SwitchRepository, AssemblyError> {
    let mut resolved = SwitchRepository::new();

    for (name, switch_type) in switch_types {
        if switch_type.definition.is_empty() {
            return Err(AssemblyError::MissingDefinition {
                switch_type: name.clone(),
            });
        }

        let wrap = |source| AssemblyError::SwitchType {
            switch_type: name.clone(),
            source,
        };

        let base = modules.get(&switch_type.definition).map_err(wrap)?;
        let module = SwitchRepository::specialize(base, &switch_type.extra_args).map_err(wrap)?;
        resolved.register(name, module).map_err(wrap)?;

        debug!(switch_type = %name, definition = %switch_type.definition, "resolved switch type");
    }

    Ok(resolved)
}

/// Validates `config` and resolves it into render-ready [`TemplateData`].
pub fn assemble(
    config: &KeyboardConfig,
    modules: &SwitchRepository,
) -> Result<TemplateData, AssemblyError> {
    validate_units(&config.units)?;
    validate_layout(config.layout)?;

    let switch_types = resolve_switch_types(&config.switch_types, modules)?;

    if !config.keywell.modifiers.matrix.is_empty() {
        warn!(
            count = config.keywell.modifiers.matrix.len(),
            "matrix modifiers are not applied to the key well"
        );
    }

    let keywell = build_template_keywell(&config.keywell, config.layout);
    let thumb_cluster = thumb_cluster::normalize(&config.thumb_cluster);

    debug!(
        rows = config.layout.rows,
        cols = config.layout.cols,
        switch_types = switch_types.len(),
        "assembled template data"
    );

    Ok(TemplateData::new(
        config.units.clone(),
        config.layout,
        switch_types,
        config.geometry,
        keywell,
        config.render,
        thumb_cluster,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::keyboard::{MatrixModifier, ThumbKey};
    use crate::models::switch_module::SwitchModuleDefinition;
    use serde_json::json;
    use std::error::Error as _;

    fn modules() -> SwitchRepository {
        let mut repo = SwitchRepository::new();
        repo.register(
            "choc_v1",
            SwitchModuleDefinition::new("choc_v1.scad", "choc_v1_switch")
                .with_extra_arg("hotswap", json!(true))
                .with_extra_arg("led", json!(false)),
        )
        .unwrap();
        repo.register("mx", SwitchModuleDefinition::new("mx.scad", "mx_switch"))
            .unwrap();
        repo
    }

    fn config() -> KeyboardConfig {
        let mut config = KeyboardConfig {
            units: Units::new("mm", "deg"),
            layout: Layout::new(5, 6),
            ..KeyboardConfig::default()
        };
        config
            .switch_types
            .insert("regular".to_string(), SwitchTypeConfig::new("choc_v1"));
        config
    }

    #[test]
    fn test_assemble_valid_config() {
        let data = assemble(&config(), &modules()).unwrap();

        assert_eq!(data.layout(), Layout::new(5, 6));
        assert_eq!(data.keywell().matrix.len(), 6);
        assert!(data.keywell().matrix.iter().all(|col| col.len() == 5));
        assert_eq!(data.thumb_cluster().keys.len(), 3);
        assert_eq!(data.switch_type_names(), vec!["regular"]);
        assert_eq!(data.switch_includes(), vec!["choc_v1.scad"]);
    }

    #[test]
    fn test_units_must_be_mm_deg() {
        let mut config = config();
        config.units = Units::new("in", "deg");
        assert!(matches!(
            assemble(&config, &modules()),
            Err(AssemblyError::UnsupportedUnits { .. })
        ));

        config.units = Units::new("mm", "rad");
        assert!(matches!(
            assemble(&config, &modules()),
            Err(AssemblyError::UnsupportedUnits { .. })
        ));
    }

    #[test]
    fn test_layout_bounds() {
        assert!(validate_layout(Layout::new(2, 5)).is_ok());
        assert!(matches!(
            validate_layout(Layout::new(1, 6)),
            Err(AssemblyError::InvalidLayout { rows: 1, .. })
        ));
        assert!(matches!(
            validate_layout(Layout::new(4, 4)),
            Err(AssemblyError::InvalidLayout { cols: 4, .. })
        ));
    }

    #[test]
    fn test_invalid_layout_checked_before_switch_types() {
        let mut config = config();
        config.layout = Layout::new(1, 6);
        config
            .switch_types
            .insert("ghost".to_string(), SwitchTypeConfig::new("does_not_exist"));

        assert!(matches!(
            assemble(&config, &modules()),
            Err(AssemblyError::InvalidLayout { .. })
        ));
    }

    #[test]
    fn test_unknown_base_module() {
        let mut config = config();
        config
            .switch_types
            .insert("ghost".to_string(), SwitchTypeConfig::new("does_not_exist"));

        let err = assemble(&config, &modules()).unwrap_err();
        assert!(matches!(
            err.repo_error(),
            Some(SwitchRepoError::NotFound { name }) if name == "does_not_exist"
        ));
        assert!(err.to_string().contains("ghost"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_missing_definition_reference() {
        let mut config = config();
        config
            .switch_types
            .insert("blank".to_string(), SwitchTypeConfig::default());

        assert_eq!(
            assemble(&config, &modules()).unwrap_err(),
            AssemblyError::MissingDefinition {
                switch_type: "blank".to_string()
            }
        );
    }

    #[test]
    fn test_switch_type_overrides() {
        let mut config = config();
        let mut low = SwitchTypeConfig::new("choc_v1");
        low.extra_args.insert("led".to_string(), json!(true));
        config.switch_types.insert("lit".to_string(), low);

        let data = assemble(&config, &modules()).unwrap();
        let lit = data.switch_types().get("lit").unwrap();
        assert_eq!(lit.extra_args["led"], json!(true));
        assert_eq!(lit.extra_args["hotswap"], json!(true));
        // Base module in the source repository is unchanged
        assert_eq!(modules().get("choc_v1").unwrap().extra_args["led"], json!(false));

        let mut bad = SwitchTypeConfig::new("mx");
        bad.extra_args.insert("led".to_string(), json!(true));
        config.switch_types.insert("bad".to_string(), bad);
        let err = assemble(&config, &modules()).unwrap_err();
        assert!(matches!(
            err,
            AssemblyError::SwitchType {
                ref switch_type,
                source: SwitchRepoError::UnknownOverrideKey { .. },
            } if switch_type == "bad"
        ));
    }

    #[test]
    fn test_matrix_layer_is_inert() {
        let mut config = config();
        config.keywell.modifiers.matrix.push(MatrixModifier {
            column: 1,
            row: 1,
            rotation: crate::models::vector::Rotation::new(30.0, 30.0, 30.0),
            ..MatrixModifier::default()
        });

        let data = assemble(&config, &modules()).unwrap();
        assert_eq!(
            data.keywell().matrix[1][1].rotation,
            crate::models::vector::Rotation::default()
        );
    }

    #[test]
    fn test_serialized_template_data() {
        let mut config = config();
        config
            .thumb_cluster
            .keys
            .insert(1, ThumbKey::default());

        let data = assemble(&config, &modules()).unwrap();
        let value = serde_json::to_value(&data).unwrap();

        assert_eq!(value["layout"]["rows"], 5);
        assert_eq!(value["all_switch_types"], json!(["regular"]));
        assert_eq!(value["all_switch_includes"], json!(["choc_v1.scad"]));
        assert_eq!(value["keywell"]["matrix"].as_array().unwrap().len(), 6);
        assert_eq!(value["keywell"]["matrix"][0][0]["type"], "regular");
        assert_eq!(value["thumb_cluster"]["keys"].as_array().unwrap().len(), 3);
        assert_eq!(value["render"]["$fn"], 0);
    }
}
