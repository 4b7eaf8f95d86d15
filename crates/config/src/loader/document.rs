//! Structured config file discovery and parsing.
//!
//! Responsibilities:
//! - Find the first existing structured config file among the candidates.
//! - Parse YAML into a loosely-typed `RawDocument` tree.
//!
//! Does NOT handle:
//! - Mapping document nodes onto typed fields (see `resolver.rs`).
//!
//! Invariants:
//! - A missing file is not an error; `locate_structured_file` returns `None`.
//! - Invalid YAML and a non-mapping root are fatal (`ConfigError`).
//! - An empty document is an empty `RawDocument`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use super::error::ConfigError;
use crate::constants::CONFIG_FILE_CANDIDATES;

/// A node of the parsed structured document.
#[derive(Debug, Clone, PartialEq)]
pub enum RawNode {
    /// A scalar rendered as text (`12`, `true`, `example.com`).
    Scalar(String),
    /// A nested mapping.
    Mapping(RawDocument),
    /// An explicit null (`key:` with no value).
    Null,
    /// A sequence. No configuration field accepts one.
    Sequence,
}

impl RawNode {
    /// Short name of the node kind for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            RawNode::Scalar(_) => "scalar",
            RawNode::Mapping(_) => "mapping",
            RawNode::Null => "null",
            RawNode::Sequence => "sequence",
        }
    }

    fn from_yaml(value: Value) -> Self {
        match value {
            Value::Null => RawNode::Null,
            Value::Bool(b) => RawNode::Scalar(b.to_string()),
            Value::Number(n) => RawNode::Scalar(n.to_string()),
            Value::String(s) => RawNode::Scalar(s),
            Value::Sequence(_) => RawNode::Sequence,
            Value::Mapping(mapping) => RawNode::Mapping(RawDocument::from_mapping(mapping)),
            Value::Tagged(tagged) => RawNode::from_yaml(tagged.value),
        }
    }
}

/// Mapping of key to node parsed from the structured config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDocument {
    entries: BTreeMap<String, RawNode>,
}

impl RawDocument {
    /// Parse YAML text. `path` is used for error reporting only.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        if text.lines().all(is_blank_line) {
            return Ok(Self::default());
        }

        let value: Value = serde_yaml::from_str(text).map_err(|source| ConfigError::Format {
            path: path.to_path_buf(),
            source,
        })?;

        match value {
            Value::Null => Ok(Self::default()),
            Value::Mapping(mapping) => Ok(Self::from_mapping(mapping)),
            other => Err(ConfigError::InvalidDocument {
                path: path.to_path_buf(),
                message: format!(
                    "expected a mapping at the document root, found {}",
                    RawNode::from_yaml(other).kind_name()
                ),
            }),
        }
    }

    fn from_mapping(mapping: serde_yaml::Mapping) -> Self {
        let entries = mapping
            .into_iter()
            .filter_map(|(key, value)| {
                let key = match key {
                    Value::String(s) => s,
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    _ => return None,
                };
                Some((key, RawNode::from_yaml(value)))
            })
            .collect();
        Self { entries }
    }

    /// Node stored directly under `key`.
    pub fn get(&self, key: &str) -> Option<&RawNode> {
        self.entries.get(key)
    }

    /// Walk `segments` through nested mappings.
    ///
    /// Returns `Err(prefix)` when an intermediate node exists but is not a
    /// mapping, so callers can report which section is malformed.
    pub fn lookup<'a, I>(&self, segments: I) -> Result<Option<&RawNode>, String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut segments = segments.into_iter().peekable();
        let mut current = self;
        let mut walked = Vec::new();

        while let Some(segment) = segments.next() {
            walked.push(segment);
            let Some(node) = current.get(segment) else {
                return Ok(None);
            };
            if segments.peek().is_none() {
                return Ok(Some(node));
            }
            match node {
                RawNode::Mapping(inner) => current = inner,
                // `section:` with nothing under it leaves the whole section at defaults.
                RawNode::Null => return Ok(None),
                _ => return Err(walked.join(".")),
            }
        }

        Ok(None)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn is_blank_line(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#') || line == "---"
}

/// Returns the first existing structured config file under `base_dir`.
pub fn locate_structured_file(base_dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_CANDIDATES
        .iter()
        .map(|name| base_dir.join(name))
        .find(|path| path.is_file())
}

/// Read and parse the structured config file at `path`.
pub fn parse_structured_file(path: &Path) -> Result<RawDocument, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    RawDocument::parse(&text, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(text: &str) -> Result<RawDocument, ConfigError> {
        RawDocument::parse(text, Path::new("config.yaml"))
    }

    #[test]
    fn test_parse_nested_scalars() {
        let doc = parse(
            "email:\n  domain: example.com\n  prefix_length: 12\nbrowser:\n  headless: true\n",
        )
        .unwrap();

        assert_eq!(
            doc.lookup(["email", "domain"]).unwrap(),
            Some(&RawNode::Scalar("example.com".to_string()))
        );
        assert_eq!(
            doc.lookup(["email", "prefix_length"]).unwrap(),
            Some(&RawNode::Scalar("12".to_string()))
        );
        assert_eq!(
            doc.lookup(["browser", "headless"]).unwrap(),
            Some(&RawNode::Scalar("true".to_string()))
        );
        assert_eq!(doc.lookup(["email", "missing"]).unwrap(), None);
        assert_eq!(doc.lookup(["missing", "domain"]).unwrap(), None);
    }

    #[test]
    fn test_lookup_through_scalar_reports_section() {
        let doc = parse("email: not-a-section\n").unwrap();
        assert_eq!(doc.lookup(["email", "domain"]), Err("email".to_string()));
    }

    #[test]
    fn test_lookup_through_null_section_is_absent() {
        let doc = parse("payment:\n").unwrap();
        assert_eq!(doc.lookup(["payment", "credit_card", "cvc"]).unwrap(), None);
    }

    #[test]
    fn test_empty_and_comment_only_documents_are_empty() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   \n").unwrap().is_empty());
        assert!(parse("# only a comment\n").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_yaml_is_format_error() {
        let err = parse("email: [unclosed\n").unwrap_err();
        assert!(matches!(err, ConfigError::Format { .. }), "got {err:?}");
    }

    #[test]
    fn test_non_mapping_root_is_invalid_document() {
        let err = parse("- one\n- two\n").unwrap_err();
        match err {
            ConfigError::InvalidDocument { message, .. } => {
                assert!(message.contains("sequence"), "message: {message}");
            }
            other => panic!("expected InvalidDocument, got {other:?}"),
        }
    }

    #[test]
    fn test_locate_prefers_first_candidate() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("config.local.yaml"), "a: 1\n").unwrap();
        assert_eq!(
            locate_structured_file(temp_dir.path()),
            Some(temp_dir.path().join("config.local.yaml"))
        );

        fs::write(temp_dir.path().join("config.yaml"), "a: 2\n").unwrap();
        assert_eq!(
            locate_structured_file(temp_dir.path()),
            Some(temp_dir.path().join("config.yaml"))
        );
    }

    #[test]
    fn test_locate_yml_before_local_variants() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("config.yml"), "a: 1\n").unwrap();
        fs::write(temp_dir.path().join("config.local.yaml"), "a: 2\n").unwrap();
        assert_eq!(
            locate_structured_file(temp_dir.path()),
            Some(temp_dir.path().join("config.yml"))
        );
    }

    #[test]
    fn test_locate_returns_none_when_no_candidate() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(locate_structured_file(temp_dir.path()), None);
    }

    #[test]
    fn test_parse_structured_file_missing_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = parse_structured_file(&temp_dir.path().join("config.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
