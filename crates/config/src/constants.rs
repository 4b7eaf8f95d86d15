//! Centralized constants for the autoreg configuration crate.
//!
//! This module contains the built-in default for every configuration field
//! and the candidate file names searched during resolution.

// =============================================================================
// File Discovery
// =============================================================================

/// Structured config file names, checked in order. The first existing file wins.
pub const CONFIG_FILE_CANDIDATES: &[&str] = &[
    "config.yaml",
    "config.yml",
    "config.local.yaml",
    "config.local.yml",
];

/// Dotenv file names, checked in order. The first existing file wins.
pub const ENV_FILE_CANDIDATES: &[&str] = &[".env", ".env.local"];

/// Environment variable that disables dotenv file loading when set to `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Registration Defaults
// =============================================================================

/// Default number of accounts to register per run.
pub const DEFAULT_TOTAL_ACCOUNTS: i64 = 1;

/// Default lower bound for generated birth dates (years).
pub const DEFAULT_MIN_AGE: i64 = 20;

/// Default upper bound for generated birth dates (years).
pub const DEFAULT_MAX_AGE: i64 = 40;

// =============================================================================
// Email Defaults
// =============================================================================

/// Default length of the random mailbox prefix.
pub const DEFAULT_EMAIL_PREFIX_LENGTH: i64 = 10;

/// Default time to wait for a verification email, in seconds.
pub const DEFAULT_EMAIL_WAIT_TIMEOUT_SECS: i64 = 120;

/// Default mailbox polling interval, in seconds.
pub const DEFAULT_EMAIL_POLL_INTERVAL_SECS: i64 = 3;

// =============================================================================
// Browser Defaults
// =============================================================================

/// Default upper bound for waiting on page elements, in seconds.
pub const DEFAULT_BROWSER_MAX_WAIT_SECS: i64 = 30;

/// Default wait for short UI transitions, in seconds.
pub const DEFAULT_BROWSER_SHORT_WAIT_SECS: i64 = 10;

/// Default browser user agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

// =============================================================================
// Password Defaults
// =============================================================================

/// Default generated password length.
pub const DEFAULT_PASSWORD_LENGTH: i64 = 16;

/// Default character set for generated passwords.
pub const DEFAULT_PASSWORD_CHARSET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

// =============================================================================
// Retry Defaults
// =============================================================================

/// Default maximum number of retries for HTTP requests.
pub const DEFAULT_HTTP_MAX_RETRIES: i64 = 3;

/// Default HTTP request timeout, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: i64 = 30;

/// Default number of reloads when an error page is shown.
pub const DEFAULT_ERROR_PAGE_MAX_RETRIES: i64 = 5;

/// Default number of attempts for clicking a button.
pub const DEFAULT_BUTTON_CLICK_MAX_RETRIES: i64 = 3;

// =============================================================================
// Batch Defaults
// =============================================================================

/// Default minimum pause between two registrations, in seconds.
pub const DEFAULT_BATCH_INTERVAL_MIN_SECS: i64 = 5;

/// Default maximum pause between two registrations, in seconds.
pub const DEFAULT_BATCH_INTERVAL_MAX_SECS: i64 = 15;

// =============================================================================
// File Defaults
// =============================================================================

/// Default output file for registered accounts.
pub const DEFAULT_ACCOUNTS_FILE: &str = "accounts.txt";
