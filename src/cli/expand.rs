//! `vracfg expand`: validate and normalize `resource_configuration` records.

use anyhow::Result;
use clap::Args;
use serde_json::Value;
use std::path::PathBuf;

use super::common::{OutputFormat, read_document, write_output};
use crate::core::VracfgError;
use crate::resource::expand_resource_configuration;
use crate::scalar::value_kind;

/// Expand a list of `{ name, configuration }` records.
#[derive(Args, Debug)]
pub struct ExpandCommand {
    /// Input file (JSON or YAML); stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

impl ExpandCommand {
    pub fn execute(self) -> Result<()> {
        let document = read_document(self.input.as_deref())?;

        let entries = match document {
            Value::Array(entries) => entries,
            other => {
                return Err(VracfgError::UnexpectedShape {
                    path: "<document>".to_string(),
                    expected: "sequence",
                    found: value_kind(&other),
                }
                .into());
            }
        };

        let configs = expand_resource_configuration(&entries)?;
        write_output(&configs, self.format)
    }
}
