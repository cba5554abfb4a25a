//! vracfg - reshape vRealize Automation resource configurations
//!
//! The vRA 7 provisioning API returns each deployment resource's data as a
//! nested, loosely typed JSON tree. Infrastructure-as-code state stores the same
//! information as `resource_configuration` blocks: a set of records, each with a
//! `name` and a flat `configuration` map of strings keyed by dotted paths. This
//! crate converts between the two shapes.
//!
//! # Architecture Overview
//!
//! ```text
//! API data map ──► flatten::parse_data_map ──► ParsedData { component_name, properties }
//!                    │  scalar::conv_to_string for leaves
//!                    │  mapper::PropertyMapper for top-level keys
//!                    ▼
//!                  resource::flatten_resource_configurations ──► [{ name, configuration }]
//!
//! host input ──► resource::expand_resource_configuration ──► [ResourceConfiguration]
//!                  (checked against schema::resource_configuration_schema)
//! ```
//!
//! Everything is synchronous and pure: no I/O in the transformation core, no
//! shared state, every call owns its data.
//!
//! # Modules
//!
//! - [`scalar`] - canonical string form of scalar values
//! - [`flatten`] - recursive flattening into dotted-path maps
//! - [`mapper`] - property-name mapping table
//! - [`resource`] - `resource_configuration` expansion and re-flattening
//! - [`schema`] - host-tool schema declaration and record shape checks
//! - [`config`] - adapter configuration file
//! - [`core`] - error types
//! - [`cli`] - the `vracfg` command-line interface
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use vracfg::{PropertyMapper, parse_data_map};
//!
//! let data = json!({
//!     "Component": "vSphere_Machine_1",
//!     "MachineCPU": 2,
//!     "NETWORK_LIST": [{
//!         "classId": "dynamicops.api.model.NetworkViewModel",
//!         "data": { "NETWORK_NAME": "dvPortGroup-1" }
//!     }]
//! });
//!
//! let parsed = parse_data_map(data.as_object().unwrap(), &PropertyMapper::builtin());
//!
//! assert_eq!(parsed.component_name.as_deref(), Some("vSphere_Machine_1"));
//! assert_eq!(parsed.properties["cpu"], "2");
//! assert_eq!(parsed.properties["NETWORK_LIST.0.NETWORK_NAME"], "dvPortGroup-1");
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod flatten;
pub mod mapper;
pub mod resource;
pub mod scalar;
pub mod schema;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use crate::core::{ErrorContext, VracfgError, user_friendly_error};
pub use flatten::{
    FlattenOptions, FlattenedMap, Flattener, ParsedData, parse_array, parse_data_map, parse_map,
};
pub use mapper::PropertyMapper;
pub use resource::{
    FlattenedResourceConfiguration, ResourceConfiguration, expand_resource_configuration,
    flatten_resource_configurations, try_flatten_resource_configurations,
};
pub use scalar::{conv_to_string, try_conv_to_string, value_kind};
pub use schema::{Attribute, AttributeType, Block, resource_configuration_schema};
