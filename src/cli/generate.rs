//! Generate command for render input files.

use crate::cli::common::{CliError, CliResult, ProjectArgs};
use crate::constants::APP_NAME;
use crate::services::generator::{render_json, Generator};
use crate::services::watch::watch;
use clap::Args;

/// Resolve a keyboard config into render-ready template data
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Project location
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print the template data to stdout instead of writing it
    #[arg(long, conflicts_with = "watch")]
    pub stdout: bool,

    /// Watch for changes and regenerate in real time
    #[arg(short, long)]
    pub watch: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        if self.watch {
            let paths = self.project.paths();
            println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
            println!(
                "Watching {} (Ctrl+C to stop)",
                paths.config_file(&self.project.config).display()
            );
            return watch(&paths, &self.project.config).map_err(|e| CliError::from_anyhow(&e));
        }

        let generator = Generator::new(self.project.paths(), &self.project.config)
            .map_err(|e| CliError::from_anyhow(&e))?;

        if self.stdout {
            let data = generator
                .template_data()
                .map_err(|e| CliError::from_anyhow(&e))?;
            let json = render_json(&data).map_err(|e| CliError::from_anyhow(&e))?;
            println!("{json}");
            return Ok(());
        }

        let path = generator
            .generate()
            .map_err(|e| CliError::from_anyhow(&e))?;

        println!("✓ Generated {}", generator.name());
        println!("  Output: {}", path.display());
        Ok(())
    }
}
