//! `vracfg schema`: print the `resource_configuration` declaration.

use anyhow::Result;
use clap::Args;
use std::collections::BTreeMap;

use super::common::{OutputFormat, write_output};
use crate::constants::RESOURCE_CONFIGURATION_ATTRIBUTE;
use crate::schema::resource_configuration_schema;

/// Print the schema the host tool declares for `resource_configuration`.
#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

impl SchemaCommand {
    pub fn execute(self) -> Result<()> {
        let mut schema = BTreeMap::new();
        schema.insert(RESOURCE_CONFIGURATION_ATTRIBUTE, resource_configuration_schema());
        write_output(&schema, self.format)
    }
}
