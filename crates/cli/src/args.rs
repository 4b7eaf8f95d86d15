//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read the base directory and config path from flags or environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not resolve configuration (see `main()`).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "autoreg")]
#[command(about = "Inspect the resolved configuration of the account registration tool", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  autoreg show\n  autoreg show --format yaml\n  autoreg sources\n  autoreg get email.domain\n  autoreg --base-dir ./deploy --config ./deploy/prod.yaml sources --format json\n"
)]
pub struct Cli {
    /// Directory searched for config.yaml / .env candidates (defaults to the current directory)
    #[arg(long, global = true, env = "AUTOREG_BASE_DIR", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Structured config file to load instead of searching the candidates
    #[arg(short, long, global = true, env = "AUTOREG_CONFIG_PATH", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only log errors to stderr.
    ///
    /// Without this flag, loaded files and warnings (missing files, ignored
    /// values) are logged unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the resolved configuration (secrets redacted)
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Json)]
        format: ShowFormat,
    },

    /// Print the files that were loaded and where each field's value came from
    Sources {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = SourcesFormat::Table)]
        format: SourcesFormat,
    },

    /// Print a single field by its dotted path (e.g. email.domain)
    Get {
        /// Dotted field path
        path: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourcesFormat {
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_show_defaults_to_json() {
        let cli = Cli::try_parse_from(["autoreg", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Show {
                format: ShowFormat::Json
            }
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "autoreg",
            "sources",
            "--config",
            "custom.yaml",
            "--base-dir",
            "deploy",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
        assert_eq!(cli.base_dir, Some(PathBuf::from("deploy")));
    }
}
