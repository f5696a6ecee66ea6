//! Switches command: list loaded switch module definitions.

use crate::cli::common::{CliError, CliResult, ProjectArgs};
use crate::services::switch_repo::SwitchRepository;
use clap::Args;
use serde::Serialize;

/// List switch modules available to switch types
#[derive(Debug, Clone, Args)]
pub struct SwitchesArgs {
    /// Project location
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One listed switch module.
#[derive(Debug, Clone, Serialize)]
pub struct SwitchEntry {
    /// Repository name
    pub name: String,
    /// Module identifier
    pub module: String,
    /// Footprint source file
    pub filename: String,
    /// Declared extra argument names
    pub extra_args: Vec<String>,
}

impl SwitchesArgs {
    /// Execute the switches command
    pub fn execute(&self) -> CliResult<()> {
        let paths = self.project.paths();
        let repo =
            SwitchRepository::load(&paths.switch_definitions_dir(), &paths.switch_assets_dir())
                .map_err(|e| CliError::from_anyhow(&e))?;

        let entries: Vec<SwitchEntry> = repo
            .iter()
            .map(|(name, module)| SwitchEntry {
                name: name.to_string(),
                module: module.module.clone(),
                filename: module.filename.clone(),
                extra_args: module.extra_args.keys().cloned().collect(),
            })
            .collect();

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&entries)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        if entries.is_empty() {
            println!("No switch modules found in {}", paths.switch_definitions_dir().display());
            return Ok(());
        }

        for entry in &entries {
            println!("{} ({} from {})", entry.name, entry.module, entry.filename);
            if !entry.extra_args.is_empty() {
                println!("  extra args: {}", entry.extra_args.join(", "));
            }
        }
        Ok(())
    }
}
