//! autoreg CLI - inspect the registration tool's resolved configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve the configuration exactly once and hand it to the command.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Resolution rules (see `autoreg-config`).
//!
//! Invariants:
//! - Logs go to stderr; command output goes to stdout.
//! - Which config files were loaded is logged by default.
//! - A malformed config file terminates with exit code 2 and no output on stdout.

mod args;
mod commands;
mod dispatch;
mod error;

use anyhow::Context;
use args::Cli;
use autoreg_config::ConfigLoader;
use clap::Parser;
use dispatch::run_command;
use error::ExitCodeExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    // File discovery is reported at info level by the config crate.
    let default_level = if cli.quiet {
        "error"
    } else {
        "warn,autoreg_config=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut loader = ConfigLoader::new();

    // Blank/whitespace-only values are ignored so an empty env var does not shadow the default
    if let Some(ref dir) = cli.base_dir
        && !dir.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_base_dir(dir.clone());
    }
    if let Some(ref path) = cli.config
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }

    let result = loader
        .resolve_with_report()
        .context("Failed to resolve configuration")
        .and_then(|(config, report)| run_command(cli, &config, &report));

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}
