//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define the fatal, document-level failures of a resolution pass.
//!
//! Does NOT handle:
//! - Field-level anomalies (bad integers, malformed dotenv lines). Those are
//!   absorbed by the resolver with a fallback and never become errors.
//!
//! Invariants:
//! - All error variants include the path of the offending file.
//! - Errors NEVER include override values, only keys and paths, to prevent secret leakage.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a resolution pass.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The structured config file is not valid YAML.
    #[error("Failed to parse config file at {path}: {source}")]
    Format {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The structured config file parsed, but its root is not a mapping.
    #[error("Invalid config file at {path}: {message}")]
    InvalidDocument { path: PathBuf, message: String },

    /// A located file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Path of the file that caused the failure.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConfigError::Format { path, .. }
            | ConfigError::InvalidDocument { path, .. }
            | ConfigError::Io { path, .. } => path,
        }
    }
}
