//! Typemon - parametric model generator for split ergonomic keyboards
//!
//! Resolves a keyboard config and its switch module definitions into the
//! template data consumed by the model templates.
//!
//! # Usage
//!
//! ```bash
//! # Resolve configs/default.yml into scad/default.config.g.json
//! typemon generate
//!
//! # Check another config without writing anything
//! typemon validate --config corne --json
//!
//! # Regenerate on every change to the config or switch definitions
//! typemon generate --watch
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use typemon::cli::{
    ClearArtefactsArgs, CliError, ExitCode, GenerateArgs, SwitchesArgs, ValidateArgs,
};
use typemon::constants::{APP_BINARY_NAME, APP_NAME};

/// Typemon - parametric model generator for ergonomic keyboards
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a config into template data
    Generate(GenerateArgs),
    /// Validate a config without writing output
    Validate(ValidateArgs),
    /// List available switch modules
    Switches(SwitchesArgs),
    /// Clear generated artefacts from the project
    ClearArtefacts(ClearArtefactsArgs),
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Command::Generate(args) => args.execute(),
        Command::Validate(args) => args.execute(),
        Command::Switches(args) => args.execute(),
        Command::ClearArtefacts(args) => args.execute(),
    };

    if let Err(err) = result {
        report(&err);
        std::process::exit(err.exit_code() as i32);
    }
    std::process::exit(ExitCode::Success as i32);
}

fn report(err: &CliError) {
    eprintln!("{APP_NAME} error: {err}");
}
