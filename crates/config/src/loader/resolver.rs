//! The resolution pass: defaults, then structured file, then dotenv and environment.
//!
//! Responsibilities:
//! - Run the three overlay steps in order and record each field's source.
//! - Absorb field-level problems with a fallback to the previous value.
//!
//! Does NOT handle:
//! - Loader configuration (see builder.rs).
//!
//! Invariants:
//! - A structured-file error aborts before the dotenv file is read.
//! - Each field is overlaid independently; a section may mix sources.
//! - Diagnostics name keys and paths, never override values.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::builder::ConfigLoader;
use super::document::{RawDocument, RawNode, locate_structured_file, parse_structured_file};
use super::dotenv::{locate_env_file, read_env_file};
use super::env::{OverrideMap, build_override_map, dotenv_disabled};
use super::error::ConfigError;
use super::report::{ResolutionReport, Source};
use crate::fields::FIELDS;
use crate::types::AppConfig;

pub(crate) fn resolve(loader: &ConfigLoader) -> Result<(AppConfig, ResolutionReport), ConfigError> {
    let base_dir = loader.base_dir();
    let environment = loader.environment_snapshot();

    let mut config = AppConfig::default();
    let mut report = ResolutionReport::default();

    match structured_file(loader, &base_dir) {
        Some(path) => {
            let document = parse_structured_file(&path)?;
            info!(path = %path.display(), "Loaded structured config file");
            overlay_document(&mut config, &mut report, &document);
            report.structured_file = Some(path);
        }
        None => {
            warn!(
                base_dir = %base_dir.display(),
                "No structured config file found; continuing with defaults and environment"
            );
        }
    }

    let dotenv = if dotenv_disabled(&environment) {
        debug!("Dotenv loading disabled");
        BTreeMap::new()
    } else {
        match locate_env_file(&base_dir) {
            Some(path) => {
                let entries = read_env_file(&path)?;
                info!(path = %path.display(), entries = entries.len(), "Loaded dotenv file");
                report.env_file = Some(path);
                entries
            }
            None => {
                debug!(base_dir = %base_dir.display(), "No dotenv file found");
                BTreeMap::new()
            }
        }
    };

    let overrides = build_override_map(dotenv, environment);
    apply_overrides(&mut config, &mut report, &overrides);

    Ok((config, report))
}

fn structured_file(loader: &ConfigLoader, base_dir: &Path) -> Option<PathBuf> {
    match loader.config_path() {
        Some(path) if path.is_file() => Some(path.clone()),
        Some(path) => {
            warn!(path = %path.display(), "Configured structured config file does not exist");
            None
        }
        None => locate_structured_file(base_dir),
    }
}

/// Overlay every leaf present in `document`; absent leaves keep their current value.
fn overlay_document(config: &mut AppConfig, report: &mut ResolutionReport, document: &RawDocument) {
    let mut malformed_sections = BTreeSet::new();

    for spec in FIELDS {
        match document.lookup(spec.segments()) {
            Ok(None) => {}
            Ok(Some(RawNode::Scalar(raw))) => match spec.apply(config, raw) {
                Ok(()) => report.record(spec.path, Source::StructuredFile),
                Err(_) => warn!(
                    field = spec.path,
                    "Ignoring non-integer value in structured config file"
                ),
            },
            Ok(Some(node)) => warn!(
                field = spec.path,
                found = node.kind_name(),
                "Ignoring non-scalar value in structured config file"
            ),
            Err(section) => {
                if malformed_sections.insert(section.clone()) {
                    warn!(
                        section = %section,
                        "Config section is not a mapping; keeping its defaults"
                    );
                }
            }
        }
    }
}

/// Apply every override whose key names a known field.
fn apply_overrides(config: &mut AppConfig, report: &mut ResolutionReport, overrides: &OverrideMap) {
    for spec in FIELDS {
        let Some((raw, source)) = overrides.get_with_source(spec.env_key) else {
            continue;
        };
        match spec.apply(config, raw) {
            Ok(()) => {
                debug!(key = spec.env_key, source = %source, "Applied override");
                report.record(spec.path, source);
            }
            Err(_) => warn!(
                key = spec.env_key,
                source = %source,
                "Ignoring override that is not a valid integer; keeping previous value"
            ),
        }
    }
}
