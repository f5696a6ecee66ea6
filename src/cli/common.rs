//! Shared CLI plumbing: error type, exit codes and project arguments.

use clap::Args;
use std::fmt;
use std::path::PathBuf;

use crate::config::ProjectPaths;
use crate::constants::DEFAULT_CONFIG_NAME;
use crate::services::assembler::AssemblyError;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Config or switch definitions are invalid
    ValidationFailed = 1,
    /// File system or serialization failure
    IoError = 2,
}

/// Category of a CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Invalid input
    Validation,
    /// I/O failure
    Io,
}

/// Error returned by command handlers.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Failure category
    pub kind: CliErrorKind,
    /// Human-readable message including the cause chain
    pub message: String,
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Classifies a library error by its cause chain.
    ///
    /// Assembly failures and malformed YAML are validation errors; everything
    /// else (missing files, permissions, serialization) is I/O.
    #[must_use]
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        let message = format!("{err:#}");
        let is_validation = err
            .chain()
            .any(|cause| cause.is::<AssemblyError>() || cause.is::<serde_yml::Error>());

        if is_validation {
            Self::validation(message)
        } else {
            Self::io(message)
        }
    }

    /// Exit code matching the error kind.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::ValidationFailed,
            CliErrorKind::Io => ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result alias for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Project location arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct ProjectArgs {
    /// Project root directory
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// YAML config file name (without extension)
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_CONFIG_NAME)]
    pub config: String,
}

impl ProjectArgs {
    /// Resolved project paths.
    #[must_use]
    pub fn paths(&self) -> ProjectPaths {
        ProjectPaths::new(&self.root)
    }
}
