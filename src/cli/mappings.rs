//! `vracfg mappings`: show the property-name table in effect.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::common::{OutputFormat, write_output};
use crate::config::AdapterConfig;

/// Print the effective raw-to-canonical property mappings.
#[derive(Args, Debug)]
pub struct MappingsCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Ignore the built-in property table
    #[arg(long)]
    no_builtin_mappings: bool,
}

impl MappingsCommand {
    pub fn execute(self, config_path: Option<PathBuf>) -> Result<()> {
        let mut config = AdapterConfig::load_with_optional(config_path)?;
        if self.no_builtin_mappings {
            config.use_builtin_mappings = false;
        }
        let mapper = config.property_mapper();
        write_output(&mapper.sorted(), self.format)
    }
}
