//! `autoreg show`: print the resolved configuration.

use std::io::Write;

use anyhow::Result;
use autoreg_config::AppConfig;

use crate::args::ShowFormat;

pub fn run<W: Write>(out: &mut W, config: &AppConfig, format: ShowFormat) -> Result<()> {
    match format {
        ShowFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, config)?;
            writeln!(out)?;
        }
        ShowFormat::Yaml => {
            let yaml = serde_yaml::to_string(config)?;
            write!(out, "{yaml}")?;
        }
    }
    Ok(())
}
