//! Flat override map built from the dotenv file and the process environment.
//!
//! Responsibilities:
//! - Merge dotenv entries with environment entries, environment winning.
//! - Remember which layer each key came from.
//! - Snapshot the process environment without panicking on non-UTF-8 values.
//!
//! Does NOT handle:
//! - Reading the dotenv file (see `dotenv.rs`).
//! - Coercing values to field types (see `fields.rs`).
//!
//! Invariants:
//! - An environment entry always replaces a dotenv entry with the same key.
//! - Keys are matched exactly; no case folding.

use std::collections::BTreeMap;

use super::report::Source;
use crate::constants::DOTENV_DISABLED_VAR;

/// Override key to raw string value, with the layer it came from.
#[derive(Debug, Clone, Default)]
pub struct OverrideMap {
    entries: BTreeMap<String, (String, Source)>,
}

impl OverrideMap {
    /// Raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|(value, _)| value.as_str())
    }

    /// Raw value for `key` together with its layer.
    pub fn get_with_source(&self, key: &str) -> Option<(&str, Source)> {
        self.entries
            .get(key)
            .map(|(value, source)| (value.as_str(), *source))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Merge `dotenv` entries with `environment` entries on top.
pub fn build_override_map<I>(dotenv: BTreeMap<String, String>, environment: I) -> OverrideMap
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut entries: BTreeMap<String, (String, Source)> = dotenv
        .into_iter()
        .map(|(key, value)| (key, (value, Source::DotenvFile)))
        .collect();

    for (key, value) in environment {
        entries.insert(key, (value, Source::Environment));
    }

    OverrideMap { entries }
}

/// Snapshot of the process environment.
///
/// Variables whose name or value is not valid UTF-8 are skipped.
pub(crate) fn process_environment() -> BTreeMap<String, String> {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// Whether `environment` asks for dotenv loading to be skipped.
pub(crate) fn dotenv_disabled(environment: &BTreeMap<String, String>) -> bool {
    matches!(
        environment.get(DOTENV_DISABLED_VAR).map(String::as_str),
        Some("true") | Some("1")
    )
}
