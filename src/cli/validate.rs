//! Validation command for keyboard configs.

use crate::cli::common::{CliError, CliErrorKind, CliResult, ProjectArgs};
use crate::services::generator::Generator;
use clap::Args;
use serde::Serialize;

/// Validate a keyboard config against the switch module repository
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Project location
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON report of the validate command.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    /// True if assembly succeeded
    pub valid: bool,
    /// Config name
    pub config: String,
    /// Failure message with its cause chain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Layout rows (valid configs only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
    /// Layout columns (valid configs only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cols: Option<usize>,
    /// Resolved switch type names
    pub switch_types: Vec<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let generator = Generator::new(self.project.paths(), &self.project.config)
            .map_err(|e| CliError::from_anyhow(&e))?;

        let (response, failure) = match generator.template_data() {
            Ok(data) => (
                ValidationResponse {
                    valid: true,
                    config: generator.name().to_string(),
                    error: None,
                    rows: Some(data.layout().rows),
                    cols: Some(data.layout().cols),
                    switch_types: data
                        .switch_type_names()
                        .into_iter()
                        .map(String::from)
                        .collect(),
                },
                None,
            ),
            Err(e) => {
                let failure = CliError::from_anyhow(&e);
                (
                    ValidationResponse {
                        valid: false,
                        config: generator.name().to_string(),
                        error: Some(failure.message.clone()),
                        rows: None,
                        cols: None,
                        switch_types: Vec::new(),
                    },
                    Some(failure),
                )
            }
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.valid {
            println!("✓ Validation passed: {}", response.config);
            if let (Some(rows), Some(cols)) = (response.rows, response.cols) {
                println!("  Layout:       {rows} rows × {cols} cols");
            }
            println!("  Switch types: {}", response.switch_types.join(", "));
        } else {
            println!("✗ Validation failed: {}", response.config);
            if let Some(error) = &response.error {
                println!("  {error}");
            }
        }

        match failure {
            Some(failure) if failure.kind == CliErrorKind::Io => Err(failure),
            Some(_) => Err(CliError::validation("Validation failed")),
            None => Ok(()),
        }
    }
}
