//! Dotenv file discovery and lenient parsing.
//!
//! Responsibilities:
//! - Find the first existing dotenv file among the candidates.
//! - Parse `KEY=VALUE` lines into a flat map without touching the process environment.
//!
//! Does NOT handle:
//! - Merging with the process environment (see `env.rs`).
//!
//! Invariants:
//! - Parsing never fails: comments, blank lines and lines without `=` are skipped.
//! - The first `=` splits key from value; later `=` belong to the value.
//! - One layer of matching surrounding quotes is stripped from the value.
//! - A later duplicate key overwrites an earlier one.
//! - Skipped lines are reported by line number only, never by content.
//! - A line that is not valid UTF-8 is skipped; it never fails the whole file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use crate::constants::ENV_FILE_CANDIDATES;

/// Returns the first existing dotenv file under `base_dir`.
pub fn locate_env_file(base_dir: &Path) -> Option<PathBuf> {
    ENV_FILE_CANDIDATES
        .iter()
        .map(|name| base_dir.join(name))
        .find(|path| path.is_file())
}

/// Parse dotenv text into a key/value map.
pub fn parse_dotenv(text: &str) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            tracing::debug!(line = index + 1, "Skipping dotenv line without '='");
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            tracing::debug!(line = index + 1, "Skipping dotenv line with empty key");
            continue;
        }
        entries.insert(key.to_string(), unquote(value.trim()).to_string());
    }

    entries
}

/// Read and parse the dotenv file at `path`.
///
/// Only a failed read is an error. Lines that are not valid UTF-8 are
/// skipped like any other malformed line.
pub fn read_env_file(path: &Path) -> Result<BTreeMap<String, String>, ConfigError> {
    let bytes = std::fs::read(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_dotenv(&decode_lines(&bytes)))
}

/// Decode `bytes` line by line, blanking lines that are not valid UTF-8 so
/// later line numbers stay accurate.
fn decode_lines(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for (index, line) in bytes.split(|b| *b == b'\n').enumerate() {
        if index > 0 {
            text.push('\n');
        }
        match std::str::from_utf8(line) {
            Ok(line) => text.push_str(line),
            Err(_) => {
                tracing::debug!(line = index + 1, "Skipping dotenv line that is not valid UTF-8");
            }
        }
    }
    text
}

/// Strip one layer of matching single or double quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
