//! The field table: every configuration leaf, its override key, and its type.
//!
//! Responsibilities:
//! - Map each dotted field path (`email.domain`) to its flat override key
//!   (`EMAIL_DOMAIN`) through one explicit, auditable table.
//! - Coerce raw override strings into the field's declared type.
//! - Render field values for display with secrets redacted.
//!
//! Does NOT handle:
//! - Locating or reading sources (see `loader` module).
//! - Deciding precedence between sources (see `loader::resolver`).
//!
//! Invariants:
//! - Override keys are written out, never derived from the path by string transformation.
//! - A failed integer coercion leaves the field untouched.
//! - The table covers every leaf of `AppConfig` exactly once.

use std::num::ParseIntError;

use secrecy::SecretString;

use crate::types::{AppConfig, redact};

/// Declared type of a configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Base-10 signed integer.
    Integer,
    /// Plain text, assigned verbatim.
    Text,
    /// Text that must never be printed.
    Secret,
}

/// Typed accessors into `AppConfig` for one field.
#[derive(Clone, Copy)]
enum Access {
    Integer {
        get: fn(&AppConfig) -> &i64,
        get_mut: fn(&mut AppConfig) -> &mut i64,
    },
    Text {
        get: fn(&AppConfig) -> &String,
        get_mut: fn(&mut AppConfig) -> &mut String,
    },
    Secret {
        get: fn(&AppConfig) -> &SecretString,
        get_mut: fn(&mut AppConfig) -> &mut SecretString,
    },
}

/// One configuration leaf.
#[derive(Clone, Copy)]
pub struct FieldSpec {
    /// Dotted path inside the structured document.
    pub path: &'static str,
    /// Key looked up in the dotenv file and process environment.
    pub env_key: &'static str,
    access: Access,
}

impl std::fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSpec")
            .field("path", &self.path)
            .field("env_key", &self.env_key)
            .field("kind", &self.kind())
            .finish()
    }
}

impl FieldSpec {
    /// The declared type of this field.
    pub fn kind(&self) -> FieldKind {
        match self.access {
            Access::Integer { .. } => FieldKind::Integer,
            Access::Text { .. } => FieldKind::Text,
            Access::Secret { .. } => FieldKind::Secret,
        }
    }

    /// Path segments inside the structured document.
    pub fn segments(&self) -> impl Iterator<Item = &'static str> {
        self.path.split('.')
    }

    /// Display form of the current value. Secrets are redacted.
    pub fn display_value(&self, config: &AppConfig) -> String {
        match self.access {
            Access::Integer { get, .. } => get(config).to_string(),
            Access::Text { get, .. } => get(config).clone(),
            Access::Secret { get, .. } => redact(get(config)).to_string(),
        }
    }

    /// Coerce `raw` to this field's type and store it.
    ///
    /// Text and secret fields take the string verbatim. Integer fields accept
    /// a base-10 integer surrounded by optional whitespace; on failure the
    /// current value is left untouched and the parse error is returned.
    pub(crate) fn apply(&self, config: &mut AppConfig, raw: &str) -> Result<(), ParseIntError> {
        match self.access {
            Access::Integer { get_mut, .. } => {
                let value = raw.trim().parse::<i64>()?;
                *get_mut(config) = value;
            }
            Access::Text { get_mut, .. } => {
                *get_mut(config) = raw.to_string();
            }
            Access::Secret { get_mut, .. } => {
                *get_mut(config) = SecretString::new(raw.into());
            }
        }
        Ok(())
    }
}

macro_rules! field {
    (Integer, $path:literal, $key:literal, $($seg:ident).+) => {
        FieldSpec {
            path: $path,
            env_key: $key,
            access: Access::Integer {
                get: |c| &c.$($seg).+,
                get_mut: |c| &mut c.$($seg).+,
            },
        }
    };
    (Text, $path:literal, $key:literal, $($seg:ident).+) => {
        FieldSpec {
            path: $path,
            env_key: $key,
            access: Access::Text {
                get: |c| &c.$($seg).+,
                get_mut: |c| &mut c.$($seg).+,
            },
        }
    };
    (Secret, $path:literal, $key:literal, $($seg:ident).+) => {
        FieldSpec {
            path: $path,
            env_key: $key,
            access: Access::Secret {
                get: |c| &c.$($seg).+,
                get_mut: |c| &mut c.$($seg).+,
            },
        }
    };
}

/// Every configuration field, in document order.
pub static FIELDS: &[FieldSpec] = &[
    // Registration
    field!(
        Integer,
        "registration.total_accounts",
        "REGISTRATION_TOTAL_ACCOUNTS",
        registration.total_accounts
    ),
    field!(Integer, "registration.min_age", "REGISTRATION_MIN_AGE", registration.min_age),
    field!(Integer, "registration.max_age", "REGISTRATION_MAX_AGE", registration.max_age),
    // Email
    field!(Text, "email.worker_url", "EMAIL_WORKER_URL", email.worker_url),
    field!(Text, "email.domain", "EMAIL_DOMAIN", email.domain),
    field!(Integer, "email.prefix_length", "EMAIL_PREFIX_LENGTH", email.prefix_length),
    field!(Integer, "email.wait_timeout", "EMAIL_WAIT_TIMEOUT", email.wait_timeout),
    field!(Integer, "email.poll_interval", "EMAIL_POLL_INTERVAL", email.poll_interval),
    field!(Secret, "email.admin_password", "EMAIL_ADMIN_PASSWORD", email.admin_password),
    // Browser
    field!(Integer, "browser.max_wait_time", "BROWSER_MAX_WAIT_TIME", browser.max_wait_time),
    field!(Integer, "browser.short_wait_time", "BROWSER_SHORT_WAIT_TIME", browser.short_wait_time),
    field!(Text, "browser.user_agent", "BROWSER_USER_AGENT", browser.user_agent),
    // Password
    field!(Integer, "password.length", "PASSWORD_LENGTH", password.length),
    field!(Text, "password.charset", "PASSWORD_CHARSET", password.charset),
    // Retry
    field!(Integer, "retry.http_max_retries", "RETRY_HTTP_MAX_RETRIES", retry.http_max_retries),
    field!(Integer, "retry.http_timeout", "RETRY_HTTP_TIMEOUT", retry.http_timeout),
    field!(
        Integer,
        "retry.error_page_max_retries",
        "RETRY_ERROR_PAGE_MAX_RETRIES",
        retry.error_page_max_retries
    ),
    field!(
        Integer,
        "retry.button_click_max_retries",
        "RETRY_BUTTON_CLICK_MAX_RETRIES",
        retry.button_click_max_retries
    ),
    // Batch
    field!(Integer, "batch.interval_min", "BATCH_INTERVAL_MIN", batch.interval_min),
    field!(Integer, "batch.interval_max", "BATCH_INTERVAL_MAX", batch.interval_max),
    // Files
    field!(Text, "files.accounts_file", "FILES_ACCOUNTS_FILE", files.accounts_file),
    // Payment
    field!(
        Secret,
        "payment.credit_card.number",
        "PAYMENT_CREDIT_CARD_NUMBER",
        payment.credit_card.number
    ),
    field!(
        Text,
        "payment.credit_card.expiry",
        "PAYMENT_CREDIT_CARD_EXPIRY",
        payment.credit_card.expiry
    ),
    field!(
        Text,
        "payment.credit_card.expiry_month",
        "PAYMENT_CREDIT_CARD_EXPIRY_MONTH",
        payment.credit_card.expiry_month
    ),
    field!(
        Text,
        "payment.credit_card.expiry_year",
        "PAYMENT_CREDIT_CARD_EXPIRY_YEAR",
        payment.credit_card.expiry_year
    ),
    field!(Secret, "payment.credit_card.cvc", "PAYMENT_CREDIT_CARD_CVC", payment.credit_card.cvc),
];

/// Look up a field by its dotted path.
pub fn find_field(path: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_unique_paths_and_keys() {
        let paths: HashSet<_> = FIELDS.iter().map(|f| f.path).collect();
        let keys: HashSet<_> = FIELDS.iter().map(|f| f.env_key).collect();
        assert_eq!(paths.len(), FIELDS.len());
        assert_eq!(keys.len(), FIELDS.len());
        assert_eq!(FIELDS.len(), 26);
    }

    #[test]
    fn test_env_keys_are_upper_snake_case() {
        for spec in FIELDS {
            assert!(
                spec.env_key
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'),
                "{} is not upper snake case",
                spec.env_key
            );
        }
    }

    #[test]
    fn test_integer_apply_accepts_surrounding_whitespace() {
        let mut config = AppConfig::default();
        let spec = find_field("email.prefix_length").unwrap();
        spec.apply(&mut config, " 12 ").unwrap();
        assert_eq!(config.email.prefix_length, 12);
    }

    #[test]
    fn test_integer_apply_rejects_garbage_and_keeps_value() {
        let mut config = AppConfig::default();
        let spec = find_field("email.prefix_length").unwrap();
        assert!(spec.apply(&mut config, "abc").is_err());
        assert!(spec.apply(&mut config, "").is_err());
        assert!(spec.apply(&mut config, "1.5").is_err());
        assert_eq!(config.email.prefix_length, 10);
    }

    #[test]
    fn test_integer_apply_accepts_negative_values() {
        let mut config = AppConfig::default();
        let spec = find_field("batch.interval_min").unwrap();
        spec.apply(&mut config, "-3").unwrap();
        assert_eq!(config.batch.interval_min, -3);
    }

    #[test]
    fn test_text_apply_is_verbatim() {
        let mut config = AppConfig::default();
        let spec = find_field("browser.user_agent").unwrap();
        spec.apply(&mut config, "  spaced agent ").unwrap();
        assert_eq!(config.browser.user_agent, "  spaced agent ");
    }

    #[test]
    fn test_secret_display_is_redacted() {
        let mut config = AppConfig::default();
        let spec = find_field("payment.credit_card.cvc").unwrap();
        assert_eq!(spec.display_value(&config), "");
        spec.apply(&mut config, "123").unwrap();
        assert_eq!(spec.display_value(&config), "********");
        assert_eq!(config.payment.credit_card.cvc.expose_secret(), "123");
    }

    #[test]
    fn test_find_field_unknown_path() {
        assert!(find_field("email").is_none());
        assert!(find_field("email.unknown").is_none());
    }
}
