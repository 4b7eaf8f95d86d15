//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` carrying where to look for sources.
//! - Run a resolution pass and return the final `AppConfig`.
//!
//! Does NOT handle:
//! - The merge algorithm itself (delegated to resolver.rs).
//! - Parsing file formats (see document.rs and dotenv.rs).
//!
//! Invariants / Assumptions:
//! - The base directory defaults to the current working directory.
//! - An explicit config path replaces the candidate search for the structured file only;
//!   the dotenv search still runs in the base directory.
//! - Without `with_environment`, each resolution takes a fresh process environment snapshot.

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::env::process_environment;
use super::error::ConfigError;
use super::report::ResolutionReport;
use super::resolver;
use crate::types::AppConfig;

/// Configuration loader that resolves defaults, files and environment into an `AppConfig`.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    base_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
    environment: Option<BTreeMap<String, String>>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory searched for `config.yaml` and `.env` candidates.
    pub fn with_base_dir(mut self, dir: PathBuf) -> Self {
        self.base_dir = Some(dir);
        self
    }

    /// Use this structured config file instead of searching the candidates.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Use these variables instead of the process environment.
    pub fn with_environment<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.environment = Some(
            vars.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Resolve the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the structured config file is not valid YAML, its
    /// root is not a mapping, or a located file cannot be read. Missing files
    /// and unparsable override values are not errors.
    pub fn resolve(&self) -> Result<AppConfig, ConfigError> {
        self.resolve_with_report().map(|(config, _)| config)
    }

    /// Resolve the configuration and report where each value came from.
    pub fn resolve_with_report(&self) -> Result<(AppConfig, ResolutionReport), ConfigError> {
        resolver::resolve(self)
    }

    /// Directory the candidate searches run in.
    pub fn base_dir(&self) -> PathBuf {
        self.base_dir
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Explicit structured config file, if one was set.
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn environment_snapshot(&self) -> BTreeMap<String, String> {
        self.environment.clone().unwrap_or_else(process_environment)
    }
}
