//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map configuration and command errors to those exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-3 are reserved for specific error categories.

use autoreg_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for autoreg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    #[allow(dead_code)]
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Config file error - the structured or dotenv file is unreadable or malformed.
    ///
    /// The operator must fix the file; retrying will not help.
    ConfigFileError = 2,

    /// Usage error - the command referred to something that does not exist.
    UsageError = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(_: &ConfigError) -> Self {
        ExitCode::ConfigFileError
    }
}

/// Errors raised by command handlers.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Unknown configuration field '{0}'. Run `autoreg sources` to list all fields.")]
    UnknownField(String),
}

impl From<&CommandError> for ExitCode {
    fn from(err: &CommandError) -> Self {
        match err {
            CommandError::UnknownField(_) => ExitCode::UsageError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if let Some(command_err) = cause.downcast_ref::<CommandError>() {
                return ExitCode::from(command_err);
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::ConfigFileError.as_i32(), 2);
        assert_eq!(ExitCode::UsageError.as_i32(), 3);
    }

    #[test]
    fn test_config_error_maps_to_config_file_error() {
        let err = anyhow::Error::new(ConfigError::InvalidDocument {
            path: PathBuf::from("config.yaml"),
            message: "expected a mapping".to_string(),
        });
        assert_eq!(err.exit_code(), ExitCode::ConfigFileError);
    }

    #[test]
    fn test_wrapped_config_error_is_found_in_chain() {
        let err = anyhow::Error::new(ConfigError::Io {
            path: PathBuf::from(".env"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        })
        .context("Failed to resolve configuration");
        assert_eq!(err.exit_code(), ExitCode::ConfigFileError);
    }

    #[test]
    fn test_unknown_field_maps_to_usage_error() {
        let err = anyhow::Error::new(CommandError::UnknownField("nope".to_string()));
        assert_eq!(err.exit_code(), ExitCode::UsageError);
    }

    #[test]
    fn test_other_errors_are_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
