//! Configuration type definitions for autoreg.
//!
//! Responsibilities:
//! - Define the typed configuration tree (`AppConfig` and its sections).
//! - Provide the built-in default for every field via `Default`.
//! - Redact secret fields on serialization.
//!
//! Does NOT handle:
//! - Reading files or environment variables (see `loader` module).
//! - Mapping field paths to override keys (see `fields` module).
//!
//! Invariants:
//! - Every field always holds a value; there are no optional leaves.
//! - Secret fields use `secrecy::SecretString` so `Debug` never prints them.
//! - Defaults come from `crate::constants`, not magic numbers.

mod app;
mod redact;
mod sections;

pub use app::AppConfig;
pub use sections::{
    BatchConfig, BrowserConfig, CreditCardConfig, EmailConfig, FilesConfig, PasswordConfig,
    PaymentConfig, RegistrationConfig, RetryConfig,
};

pub(crate) use redact::redact;
