//! Clear-artefacts command.

use crate::cli::common::{CliError, CliResult};
use crate::config::ProjectPaths;
use crate::services::generator::clear_artefacts;
use clap::Args;
use std::path::PathBuf;

/// Remove generated model sources and rendered models
#[derive(Debug, Clone, Args)]
pub struct ClearArtefactsArgs {
    /// Project root directory
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,
}

impl ClearArtefactsArgs {
    /// Execute the clear-artefacts command
    pub fn execute(&self) -> CliResult<()> {
        let removed = clear_artefacts(&ProjectPaths::new(&self.root))
            .map_err(|e| CliError::from_anyhow(&e))?;

        println!("✓ Removed {removed} generated files");
        Ok(())
    }
}
