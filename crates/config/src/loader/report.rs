//! Provenance of resolved configuration values.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::fields::FIELDS;

/// The layer a field's final value came from, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Default,
    StructuredFile,
    DotenvFile,
    Environment,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Source::Default => "default",
            Source::StructuredFile => "structured file",
            Source::DotenvFile => "dotenv file",
            Source::Environment => "environment",
        };
        f.write_str(label)
    }
}

/// What a resolution pass read and where every field ended up coming from.
#[derive(Debug, Clone)]
pub struct ResolutionReport {
    /// Structured config file that was loaded, if any.
    pub structured_file: Option<PathBuf>,
    /// Dotenv file that was loaded, if any.
    pub env_file: Option<PathBuf>,
    sources: BTreeMap<&'static str, Source>,
}

impl Default for ResolutionReport {
    fn default() -> Self {
        Self {
            structured_file: None,
            env_file: None,
            sources: FIELDS.iter().map(|spec| (spec.path, Source::Default)).collect(),
        }
    }
}

impl ResolutionReport {
    /// Source of the field at `path`, or `None` for an unknown path.
    pub fn source_of(&self, path: &str) -> Option<Source> {
        self.sources.get(path).copied()
    }

    /// Fields whose value came from `source`.
    pub fn fields_from(&self, source: Source) -> impl Iterator<Item = &'static str> + '_ {
        self.sources
            .iter()
            .filter(move |(_, s)| **s == source)
            .map(|(path, _)| *path)
    }

    pub(crate) fn record(&mut self, path: &'static str, source: Source) {
        self.sources.insert(path, source);
    }
}
