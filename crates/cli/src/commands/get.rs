//! `autoreg get`: print one field by its dotted path.

use std::io::Write;

use anyhow::Result;
use autoreg_config::AppConfig;

use crate::error::CommandError;

pub fn run<W: Write>(out: &mut W, config: &AppConfig, path: &str) -> Result<()> {
    let value = config
        .field_value(path)
        .ok_or_else(|| CommandError::UnknownField(path.to_string()))?;
    writeln!(out, "{value}")?;
    Ok(())
}
