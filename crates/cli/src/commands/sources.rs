//! `autoreg sources`: print the loaded files and each field's provenance.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use autoreg_config::{AppConfig, FIELDS, FieldKind, ResolutionReport, Source};
use serde::Serialize;

use crate::args::SourcesFormat;

#[derive(Serialize)]
struct FieldRow {
    path: &'static str,
    env_key: &'static str,
    kind: &'static str,
    value: String,
    source: Source,
}

#[derive(Serialize)]
struct SourcesOutput<'a> {
    structured_file: Option<&'a Path>,
    env_file: Option<&'a Path>,
    fields: Vec<FieldRow>,
}

fn kind_label(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Integer => "integer",
        FieldKind::Text => "string",
        FieldKind::Secret => "secret",
    }
}

fn rows(config: &AppConfig, report: &ResolutionReport) -> Vec<FieldRow> {
    FIELDS
        .iter()
        .map(|spec| FieldRow {
            path: spec.path,
            env_key: spec.env_key,
            kind: kind_label(spec.kind()),
            value: spec.display_value(config),
            source: report.source_of(spec.path).unwrap_or(Source::Default),
        })
        .collect()
}

fn describe(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string())
}

pub fn run<W: Write>(
    out: &mut W,
    config: &AppConfig,
    report: &ResolutionReport,
    format: SourcesFormat,
) -> Result<()> {
    let rows = rows(config, report);

    match format {
        SourcesFormat::Json => {
            let output = SourcesOutput {
                structured_file: report.structured_file.as_deref(),
                env_file: report.env_file.as_deref(),
                fields: rows,
            };
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
        }
        SourcesFormat::Table => {
            writeln!(
                out,
                "Structured file: {}",
                describe(report.structured_file.as_deref())
            )?;
            writeln!(out, "Dotenv file:     {}", describe(report.env_file.as_deref()))?;
            writeln!(out)?;

            let path_width = rows.iter().map(|r| r.path.len()).max().unwrap_or(0).max(5);
            let key_width = rows.iter().map(|r| r.env_key.len()).max().unwrap_or(0).max(3);
            writeln!(
                out,
                "{:<path_width$}  {:<key_width$}  {:<15}  VALUE",
                "FIELD", "KEY", "SOURCE"
            )?;
            for row in &rows {
                writeln!(
                    out,
                    "{:<path_width$}  {:<key_width$}  {:<15}  {}",
                    row.path,
                    row.env_key,
                    row.source.to_string(),
                    row.value
                )?;
            }
        }
    }
    Ok(())
}
