//! CLI command handlers for typemon.
//!
//! Each subcommand loads the project from scratch, so repeated invocations
//! never share state.

pub mod clear;
pub mod common;
pub mod generate;
pub mod switches;
pub mod validate;

// Re-export types used by main.rs and tests
pub use clear::ClearArtefactsArgs;
pub use common::{CliError, CliErrorKind, CliResult, ExitCode, ProjectArgs};
pub use generate::GenerateArgs;
pub use switches::SwitchesArgs;
pub use validate::ValidateArgs;
