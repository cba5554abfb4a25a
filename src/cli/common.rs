//! Input and output helpers shared by the commands.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::debug;

use crate::core::VracfgError;

/// Output document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// YAML
    Yaml,
}

/// Read a JSON or YAML document from `input`, or stdin when it is `None` or `-`.
///
/// `.yaml`/`.yml` files are parsed as YAML and `.json` files as JSON. Anything
/// else (including stdin) is tried as JSON first, then as YAML.
pub fn read_document(input: Option<&Path>) -> Result<Value> {
    match input {
        Some(path) if path != Path::new("-") => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
            let extension = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
            parse_document(&content, &path.display().to_string(), extension.as_deref())
        }
        _ => {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content).context("Failed to read stdin")?;
            parse_document(&content, "<stdin>", None)
        }
    }
}

/// Parse `content` as JSON or YAML depending on `extension`.
pub fn parse_document(
    content: &str,
    source_name: &str,
    extension: Option<&str>,
) -> Result<Value> {
    let parse_error = |reason: String| VracfgError::InputParseError {
        source_name: source_name.to_string(),
        reason,
    };

    let value: Value = match extension {
        Some("json") => serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?,
        Some("yaml" | "yml") => {
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?
        }
        _ => match serde_json::from_str(content) {
            Ok(value) => value,
            Err(json_error) => {
                debug!(source = source_name, error = %json_error, "not JSON, trying YAML");
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?
            }
        },
    };

    Ok(value)
}

/// Write `value` to stdout in `format`.
pub fn write_output<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    let rendered = render(value, format)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}

/// Render `value` as a string in `format`.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")?
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).context("Failed to serialize output as YAML")?
        }
    })
}
