//! Redaction helpers for secret configuration values.

use secrecy::{ExposeSecret, SecretString};

/// Placeholder printed in place of a non-empty secret.
pub(crate) const REDACTED: &str = "********";

/// Returns the display form of a secret: empty stays empty, anything else is masked.
pub(crate) fn redact(secret: &SecretString) -> &'static str {
    if secret.expose_secret().is_empty() {
        ""
    } else {
        REDACTED
    }
}

/// Serde adapter that writes a `SecretString` as its redacted form.
pub(crate) mod redacted_secret {
    use secrecy::SecretString;
    use serde::Serializer;

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(super::redact(secret))
    }
}
