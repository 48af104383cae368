use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

pub const FORMAT_JSON: &str = "json";
pub const FORMAT_YAML: &str = "yaml";
pub const FORMATS: [&str; 2] = [FORMAT_JSON, FORMAT_YAML];

///
/// Serialize a value as pretty JSON or YAML.
///
pub fn render<T: Serialize>(value: &T, format: &str) -> Result<String> {
    let text = match format {
        FORMAT_YAML => serde_yaml::to_string(value).context("Failed to serialize YAML")?,
        _ => {
            let mut json =
                serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
            json.push('\n');
            json
        }
    };
    Ok(text)
}

///
/// Write rendered output to a file, or to stdout when no path is given.
///
pub fn write_output(text: &str, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(Path::new(path))
                .with_context(|| format!("Failed to create {}", path))?;
            let mut writer = BufWriter::new(file);
            writer.write_all(text.as_bytes())?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(text.as_bytes())?;
        }
    }
    Ok(())
}
