//! Configuration sections consumed by the registration workflow.
//!
//! Each section is a plain record of typed leaves. Integer fields are `i64`
//! so that any base-10 override the operator writes can be represented;
//! range checks belong to the consumers.

use secrecy::SecretString;
use serde::Serialize;

use super::redact::redacted_secret;
use crate::constants::{
    DEFAULT_ACCOUNTS_FILE, DEFAULT_BATCH_INTERVAL_MAX_SECS, DEFAULT_BATCH_INTERVAL_MIN_SECS,
    DEFAULT_BROWSER_MAX_WAIT_SECS, DEFAULT_BROWSER_SHORT_WAIT_SECS,
    DEFAULT_BUTTON_CLICK_MAX_RETRIES, DEFAULT_EMAIL_POLL_INTERVAL_SECS,
    DEFAULT_EMAIL_PREFIX_LENGTH, DEFAULT_EMAIL_WAIT_TIMEOUT_SECS, DEFAULT_ERROR_PAGE_MAX_RETRIES,
    DEFAULT_HTTP_MAX_RETRIES, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_MAX_AGE, DEFAULT_MIN_AGE,
    DEFAULT_PASSWORD_CHARSET, DEFAULT_PASSWORD_LENGTH, DEFAULT_TOTAL_ACCOUNTS, DEFAULT_USER_AGENT,
};

fn empty_secret() -> SecretString {
    SecretString::new("".into())
}

/// Account registration settings.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationConfig {
    /// Number of accounts to register in one run.
    pub total_accounts: i64,
    /// Minimum age used when generating a birth date.
    pub min_age: i64,
    /// Maximum age used when generating a birth date.
    pub max_age: i64,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            total_accounts: DEFAULT_TOTAL_ACCOUNTS,
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

/// Temporary mailbox settings.
#[derive(Debug, Clone, Serialize)]
pub struct EmailConfig {
    /// Base URL of the mail worker that receives verification emails.
    pub worker_url: String,
    /// Domain used for generated addresses.
    pub domain: String,
    /// Length of the random local part.
    pub prefix_length: i64,
    /// How long to wait for a verification email (seconds).
    pub wait_timeout: i64,
    /// Mailbox polling interval (seconds).
    pub poll_interval: i64,
    /// Admin password for the mail worker API.
    #[serde(with = "redacted_secret")]
    pub admin_password: SecretString,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            worker_url: String::new(),
            domain: String::new(),
            prefix_length: DEFAULT_EMAIL_PREFIX_LENGTH,
            wait_timeout: DEFAULT_EMAIL_WAIT_TIMEOUT_SECS,
            poll_interval: DEFAULT_EMAIL_POLL_INTERVAL_SECS,
            admin_password: empty_secret(),
        }
    }
}

/// Browser driver settings.
#[derive(Debug, Clone, Serialize)]
pub struct BrowserConfig {
    pub max_wait_time: i64,
    pub short_wait_time: i64,
    pub user_agent: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            max_wait_time: DEFAULT_BROWSER_MAX_WAIT_SECS,
            short_wait_time: DEFAULT_BROWSER_SHORT_WAIT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Generated password settings.
#[derive(Debug, Clone, Serialize)]
pub struct PasswordConfig {
    pub length: i64,
    pub charset: String,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            charset: DEFAULT_PASSWORD_CHARSET.to_string(),
        }
    }
}

/// Retry limits for flaky steps.
#[derive(Debug, Clone, Serialize)]
pub struct RetryConfig {
    pub http_max_retries: i64,
    /// HTTP request timeout (seconds).
    pub http_timeout: i64,
    pub error_page_max_retries: i64,
    pub button_click_max_retries: i64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            http_max_retries: DEFAULT_HTTP_MAX_RETRIES,
            http_timeout: DEFAULT_HTTP_TIMEOUT_SECS,
            error_page_max_retries: DEFAULT_ERROR_PAGE_MAX_RETRIES,
            button_click_max_retries: DEFAULT_BUTTON_CLICK_MAX_RETRIES,
        }
    }
}

/// Pause between consecutive registrations, picked uniformly from the range (seconds).
#[derive(Debug, Clone, Serialize)]
pub struct BatchConfig {
    pub interval_min: i64,
    pub interval_max: i64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            interval_min: DEFAULT_BATCH_INTERVAL_MIN_SECS,
            interval_max: DEFAULT_BATCH_INTERVAL_MAX_SECS,
        }
    }
}

/// Output file locations.
#[derive(Debug, Clone, Serialize)]
pub struct FilesConfig {
    pub accounts_file: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            accounts_file: DEFAULT_ACCOUNTS_FILE.to_string(),
        }
    }
}

/// Card details used by the payment step.
///
/// Expiry is kept both combined (`MM/YY`) and split because different
/// checkout forms ask for different shapes.
#[derive(Debug, Clone, Serialize)]
pub struct CreditCardConfig {
    #[serde(with = "redacted_secret")]
    pub number: SecretString,
    pub expiry: String,
    pub expiry_month: String,
    pub expiry_year: String,
    #[serde(with = "redacted_secret")]
    pub cvc: SecretString,
}

impl Default for CreditCardConfig {
    fn default() -> Self {
        Self {
            number: empty_secret(),
            expiry: String::new(),
            expiry_month: String::new(),
            expiry_year: String::new(),
            cvc: empty_secret(),
        }
    }
}

/// Payment settings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentConfig {
    pub credit_card: CreditCardConfig,
}
