//! `resource_configuration` records: expansion from host input and
//! re-flattening of API data for the host's state.
//!
//! The two directions work on different representations:
//!
//! - [`expand_resource_configuration`] reads what the user wrote: a list of
//!   `{ name, configuration }` maps whose configuration is kept nested as-is.
//! - [`flatten_resource_configurations`] writes what the host stores: the
//!   configuration flattened into dotted-path strings, with the name taken from
//!   the embedded `Component` field when there is one.
//!
//! They are not inverses. Flattened output is never fed back through
//! expansion, and the dotted-path encoding cannot tell a map with numeric keys
//! from an array.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::constants::{CONFIGURATION_FIELD, NAME_FIELD};
use crate::core::VracfgError;
use crate::flatten::{FlattenedMap, Flattener, ParsedData, parse_data_map};
use crate::mapper::PropertyMapper;
use crate::schema::resource_configuration_schema;

/// A named resource with its nested configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfiguration {
    /// Resource (component) name
    pub name: String,
    /// Nested configuration as returned by, or sent to, the API
    #[serde(default)]
    pub configuration: Map<String, Value>,
}

impl ResourceConfiguration {
    /// Create a resource configuration.
    #[must_use]
    pub fn new(name: impl Into<String>, configuration: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            configuration,
        }
    }
}

/// A resource configuration in the host's flattened form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlattenedResourceConfiguration {
    /// Component name, or the input name when the data has none
    pub name: String,
    /// Dotted-path properties
    pub configuration: FlattenedMap,
}

impl FlattenedResourceConfiguration {
    /// Render as `{ "name": ..., "configuration": { ... } }`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let configuration: Map<String, Value> = self
            .configuration
            .iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect();

        let mut record = Map::new();
        record.insert(NAME_FIELD.to_string(), Value::String(self.name.clone()));
        record.insert(CONFIGURATION_FIELD.to_string(), Value::Object(configuration));
        Value::Object(record)
    }
}

/// Turn raw `{ name, configuration }` entries into [`ResourceConfiguration`]s.
///
/// Input order is preserved. Configurations are taken as-is, without
/// flattening.
///
/// # Errors
///
/// [`VracfgError::InvalidResourceConfiguration`] naming the index of the first
/// entry that is not a map, lacks a string `name`, or lacks a map
/// `configuration`.
pub fn expand_resource_configuration(
    entries: &[Value],
) -> Result<Vec<ResourceConfiguration>, VracfgError> {
    let schema = resource_configuration_schema();
    let mut configs = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let invalid = |reason: String| VracfgError::InvalidResourceConfiguration {
            index,
            reason,
        };

        if let Some(block) = schema.block() {
            block.check_entry(entry).map_err(invalid)?;
        }

        let name = match entry.get(NAME_FIELD) {
            Some(Value::String(name)) => name.clone(),
            _ => return Err(invalid(format!("missing required field '{NAME_FIELD}'"))),
        };
        let configuration = match entry.get(CONFIGURATION_FIELD) {
            Some(Value::Object(configuration)) => configuration.clone(),
            _ => return Err(invalid(format!("missing required field '{CONFIGURATION_FIELD}'"))),
        };

        configs.push(ResourceConfiguration {
            name,
            configuration,
        });
    }

    debug!(count = configs.len(), "expanded resource configurations");
    Ok(configs)
}

/// Flatten each configuration for the host's state, leniently.
///
/// Empty input gives an empty `Vec`.
#[must_use]
pub fn flatten_resource_configurations(
    configs: &[ResourceConfiguration],
    mapper: &PropertyMapper,
) -> Vec<FlattenedResourceConfiguration> {
    configs
        .iter()
        .map(|config| flatten_one(config, parse_data_map(&config.configuration, mapper)))
        .collect()
}

/// Flatten each configuration with an explicit [`Flattener`].
///
/// # Errors
///
/// Whatever the flattener reports (strict mode only).
pub fn try_flatten_resource_configurations(
    configs: &[ResourceConfiguration],
    flattener: &Flattener<'_>,
) -> Result<Vec<FlattenedResourceConfiguration>, VracfgError> {
    configs
        .iter()
        .map(|config| Ok(flatten_one(config, flattener.parse_data_map(&config.configuration)?)))
        .collect()
}

fn flatten_one(
    config: &ResourceConfiguration,
    parsed: ParsedData,
) -> FlattenedResourceConfiguration {
    FlattenedResourceConfiguration {
        name: parsed.component_name.unwrap_or_else(|| config.name.clone()),
        configuration: parsed.properties,
    }
}
