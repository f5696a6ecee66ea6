//! Switch module repository.
//!
//! Maps switch module names to their footprint definitions. Registration is
//! existence-checked and strict; only [`SwitchRepository::load`] tolerates
//! individual bad definitions, which it logs and skips.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::switch_module::{ExtraArgs, SwitchModuleDefinition};
use crate::parser::switch_module::load_switch_modules;

/// Errors raised by repository operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwitchRepoError {
    /// No module registered under this name
    #[error("switch module not found: {name}")]
    NotFound {
        /// Requested module name
        name: String,
    },
    /// A module with this name is already registered
    #[error("switch module already exists: {name}")]
    DuplicateName {
        /// Conflicting module name
        name: String,
    },
    /// The definition is missing a required field
    #[error("invalid switch module {name}: {reason}")]
    InvalidDefinition {
        /// Module name
        name: String,
        /// What is wrong with it
        reason: &'static str,
    },
    /// The footprint file referenced by the definition does not exist
    #[error("switch module file not found for {name}: {}", path.display())]
    MissingAsset {
        /// Module name
        name: String,
        /// Resolved footprint path
        path: PathBuf,
    },
    /// An override names an extra argument the base module does not declare
    #[error("extra argument {key} not found in module {module}")]
    UnknownOverrideKey {
        /// Module identifier of the base definition
        module: String,
        /// Offending override key
        key: String,
    },
}

/// Switch module definitions keyed by name.
///
/// A repository created with [`SwitchRepository::with_assets`] verifies that
/// every registered footprint file exists under its asset directory. One
/// created with [`SwitchRepository::new`] holds definitions whose footprints
/// were already verified elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SwitchRepository {
    modules: BTreeMap<String, SwitchModuleDefinition>,
    #[serde(skip)]
    asset_dir: Option<PathBuf>,
}

impl SwitchRepository {
    /// Creates an empty repository without footprint checks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty repository resolving footprints under `asset_dir`.
    pub fn with_assets(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            modules: BTreeMap::new(),
            asset_dir: Some(asset_dir.into()),
        }
    }

    /// Loads every definition in `definitions_dir` into a fresh repository.
    ///
    /// Reading or parsing a definition file aborts the load. A definition that
    /// parses but cannot be registered is logged and skipped.
    pub fn load(definitions_dir: &Path, asset_dir: &Path) -> Result<Self> {
        let modules = load_switch_modules(definitions_dir).with_context(|| {
            format!(
                "Failed to load switch modules from {}",
                definitions_dir.display()
            )
        })?;

        let mut repo = Self::with_assets(asset_dir);
        for (name, module) in modules {
            if let Err(e) = repo.register(&name, module) {
                warn!("failed to add switch module: {e}");
            }
        }

        debug!(
            count = repo.len(),
            dir = %definitions_dir.display(),
            "loaded switch modules"
        );
        Ok(repo)
    }

    /// Looks up a module by name.
    pub fn get(&self, name: &str) -> Result<&SwitchModuleDefinition, SwitchRepoError> {
        self.modules.get(name).ok_or_else(|| SwitchRepoError::NotFound {
            name: name.to_string(),
        })
    }

    /// Registers `module` under `name`.
    pub fn register(
        &mut self,
        name: &str,
        module: SwitchModuleDefinition,
    ) -> Result<(), SwitchRepoError> {
        if self.modules.contains_key(name) {
            return Err(SwitchRepoError::DuplicateName {
                name: name.to_string(),
            });
        }
        if module.filename.is_empty() {
            return Err(SwitchRepoError::InvalidDefinition {
                name: name.to_string(),
                reason: "filename is empty",
            });
        }
        if module.module.is_empty() {
            return Err(SwitchRepoError::InvalidDefinition {
                name: name.to_string(),
                reason: "module is empty",
            });
        }
        if let Some(asset_dir) = &self.asset_dir {
            let path = asset_dir.join(&module.filename);
            if !path.exists() {
                return Err(SwitchRepoError::MissingAsset {
                    name: name.to_string(),
                    path,
                });
            }
        }

        self.modules.insert(name.to_string(), module);
        Ok(())
    }

    /// Derives a new definition from `base` with some extra arguments replaced.
    ///
    /// Every key in `overrides` must already be declared by `base`. Keys not
    /// mentioned keep the base value. `base` is left untouched.
    pub fn specialize(
        base: &SwitchModuleDefinition,
        overrides: &ExtraArgs,
    ) -> Result<SwitchModuleDefinition, SwitchRepoError> {
        let mut specialized = base.clone();
        for (key, value) in overrides {
            if !base.declares_arg(key) {
                return Err(SwitchRepoError::UnknownOverrideKey {
                    module: base.module.clone(),
                    key: key.clone(),
                });
            }
            specialized.extra_args.insert(key.clone(), value.clone());
        }

        Ok(specialized)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    /// Registered `(name, definition)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SwitchModuleDefinition)> {
        self.modules.iter().map(|(name, module)| (name.as_str(), module))
    }

    /// Number of registered modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
