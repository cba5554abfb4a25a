//! `vracfg flatten`: reshape API data into the host's flattened form.
//!
//! The input document decides what is flattened:
//!
//! - a **mapping** is one resource's data map as returned by the API; the
//!   output is `{ "component": <name or null>, "configuration": { ... } }`
//! - a **sequence** is a list of `{ name, configuration }` records; they are
//!   expanded, then each configuration is flattened, and the output is the list
//!   of `{ name, configuration }` the host stores

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

use super::common::{OutputFormat, read_document, write_output};
use crate::config::AdapterConfig;
use crate::core::VracfgError;
use crate::flatten::{FlattenedMap, Flattener};
use crate::resource::{expand_resource_configuration, try_flatten_resource_configurations};
use crate::scalar::value_kind;

/// Flatten a data map or a list of resource configurations.
#[derive(Args, Debug)]
pub struct FlattenCommand {
    /// Input file (JSON or YAML); stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Fail on values that have no string form
    #[arg(long)]
    strict: bool,

    /// Ignore the built-in property table (config mappings still apply)
    #[arg(long)]
    no_builtin_mappings: bool,
}

/// Output for a single data map.
#[derive(Debug, Serialize)]
struct FlattenedDataMap {
    component: Option<String>,
    configuration: FlattenedMap,
}

impl FlattenCommand {
    pub fn execute(self, config_path: Option<PathBuf>) -> Result<()> {
        let mut config = AdapterConfig::load_with_optional(config_path)?;
        if self.no_builtin_mappings {
            config.use_builtin_mappings = false;
        }
        if self.strict {
            config.strict = true;
        }
        let options = config.flatten_options();
        let mapper = config.property_mapper();
        let flattener = Flattener::new(&mapper).with_options(options);

        let document = read_document(self.input.as_deref())?;
        debug!(kind = value_kind(&document), strict = options.strict, "flattening document");

        match document {
            Value::Object(data) => {
                let parsed = flattener.parse_data_map(&data)?;
                write_output(
                    &FlattenedDataMap {
                        component: parsed.component_name,
                        configuration: parsed.properties,
                    },
                    self.format,
                )
            }
            Value::Array(entries) => {
                let configs = expand_resource_configuration(&entries)?;
                let flattened = try_flatten_resource_configurations(&configs, &flattener)?;
                write_output(&flattened, self.format)
            }
            other => Err(VracfgError::UnexpectedShape {
                path: "<document>".to_string(),
                expected: "mapping or sequence",
                found: value_kind(&other),
            }
            .into()),
        }
    }
}
