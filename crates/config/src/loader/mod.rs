//! Configuration loader for files and environment variables.
//!
//! Responsibilities:
//! - Locate and parse the structured config file (`config.yaml` and friends).
//! - Locate and parse the dotenv file (`.env`, `.env.local`).
//! - Merge the process environment over the dotenv entries.
//! - Provide a builder-pattern `ConfigLoader` that runs one resolution pass.
//!
//! Does NOT handle:
//! - Defining fields or defaults (see `types` and `fields`).
//! - Publishing the result to other threads (see `shared`).
//!
//! Invariants / Assumptions:
//! - Precedence per field: process environment > dotenv file > structured file > default.
//! - Only document-level failures (unparsable YAML, unreadable file) are errors.
//! - Loading never mutates the process environment.

mod builder;
mod document;
mod dotenv;
mod env;
mod error;
mod report;
mod resolver;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use document::{RawDocument, RawNode, locate_structured_file, parse_structured_file};
pub use dotenv::{locate_env_file, parse_dotenv, read_env_file};
pub use env::{OverrideMap, build_override_map};
pub use error::ConfigError;
pub use report::{ResolutionReport, Source};
