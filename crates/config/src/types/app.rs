//! Root configuration aggregate.

use serde::Serialize;

use super::sections::{
    BatchConfig, BrowserConfig, EmailConfig, FilesConfig, PasswordConfig, PaymentConfig,
    RegistrationConfig, RetryConfig,
};
use crate::fields::find_field;

/// Fully resolved application configuration.
///
/// Built once by `ConfigLoader::resolve()` and then shared read-only with the
/// registration workflow, browser driver, email poller and payment step.
/// `Default` yields the built-in value for every field.
///
/// Serializing an `AppConfig` redacts secret fields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppConfig {
    pub registration: RegistrationConfig,
    pub email: EmailConfig,
    pub browser: BrowserConfig,
    pub password: PasswordConfig,
    pub retry: RetryConfig,
    pub batch: BatchConfig,
    pub files: FilesConfig,
    pub payment: PaymentConfig,
}

impl AppConfig {
    /// Display form of the field at `path`, or `None` for an unknown path.
    ///
    /// Secrets are redacted.
    pub fn field_value(&self, path: &str) -> Option<String> {
        find_field(path).map(|spec| spec.display_value(self))
    }
}
