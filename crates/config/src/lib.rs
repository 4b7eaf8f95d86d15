//! Configuration management for autoreg.
//!
//! This crate resolves the registration tool's configuration from built-in
//! defaults, a structured YAML file, a dotenv file and the process
//! environment, in increasing order of precedence.

pub mod constants;
pub mod fields;
mod loader;
mod shared;
pub mod types;

pub use fields::{FIELDS, FieldKind, FieldSpec, find_field};
pub use loader::{
    ConfigError, ConfigLoader, OverrideMap, RawDocument, RawNode, ResolutionReport, Source,
    build_override_map, locate_env_file, locate_structured_file, parse_dotenv,
    parse_structured_file, read_env_file,
};
pub use shared::SharedConfig;
pub use types::{
    AppConfig, BatchConfig, BrowserConfig, CreditCardConfig, EmailConfig, FilesConfig,
    PasswordConfig, PaymentConfig, RegistrationConfig, RetryConfig,
};
