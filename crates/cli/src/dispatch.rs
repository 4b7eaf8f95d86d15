//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration resolution (see `main()`).

use anyhow::Result;
use autoreg_config::{AppConfig, ResolutionReport};

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers, writing to stdout.
pub(crate) fn run_command(cli: Cli, config: &AppConfig, report: &ResolutionReport) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Show { format } => commands::show::run(&mut out, config, format),
        Commands::Sources { format } => commands::sources::run(&mut out, config, report, format),
        Commands::Get { path } => commands::get::run(&mut out, config, &path),
    }
}
