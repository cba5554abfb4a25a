//! Field names and path conventions shared across the crate.
//!
//! These are the literal keys the provisioning API and the host tool agree on.
//! Defining them centrally keeps the flattening rules and the schema
//! declaration in sync.

/// Top-level field of a resource's data map that carries the component name.
///
/// It is promoted to the resource-level `name` and consumed during flattening.
pub const COMPONENT_KEY: &str = "Component";

/// Key inside an array element whose value holds the payload worth keeping.
///
/// Properties like `NETWORK_LIST` or `DISK_VOLUMES` come back as arrays of
/// records that wrap the interesting values in `data` next to type metadata
/// (`componentTypeId`, `classId`, `typeFilter`, ...).
pub const DATA_KEY: &str = "data";

/// Separator between path segments in flattened keys.
pub const PATH_SEPARATOR: char = '.';

/// Name field of a `resource_configuration` record.
pub const NAME_FIELD: &str = "name";

/// Configuration field of a `resource_configuration` record.
pub const CONFIGURATION_FIELD: &str = "configuration";

/// Attribute name of the `resource_configuration` set in the host schema.
pub const RESOURCE_CONFIGURATION_ATTRIBUTE: &str = "resource_configuration";

/// Environment variable that overrides the adapter config file location.
pub const CONFIG_PATH_ENV: &str = "VRACFG_CONFIG";
