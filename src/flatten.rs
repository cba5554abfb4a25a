//! Flattening of nested API data into dotted-path string maps.
//!
//! A resource's data map as returned by the provisioning API is an arbitrary
//! tree of maps, arrays and scalars. The host tool stores it as a single-level
//! map of strings, keyed by the path of each leaf:
//!
//! ```text
//! {                                          {
//!   "Component": "vSphere_Machine_1",          "cpu": "2",
//!   "MachineCPU": 2,                    ──►    "NETWORK_LIST.0.NETWORK_NAME": "dvPortGroup-1",
//!   "NETWORK_LIST": [{                         "Tags.env": "prod"
//!     "classId": "dynamicops.api.model",     }
//!     "data": { "NETWORK_NAME": "dvPortGroup-1" }
//!   }],                                      component name: "vSphere_Machine_1"
//!   "Tags": { "env": "prod" }
//! }
//! ```
//!
//! Rules:
//! - A top-level `Component` field is consumed and returned as the component name.
//! - Top-level keys are renamed through the [`PropertyMapper`]; nested keys never are.
//! - Maps and arrays recurse, appending `.<key>` or `.<index>` to the path.
//! - An array element that is a map only contributes the contents of its `data`
//!   field; the type metadata around it is dropped. Elements without `data`
//!   contribute nothing.
//! - Scalars are rendered with [`conv_to_string`].
//!
//! The free functions [`parse_data_map`], [`parse_map`] and [`parse_array`] are
//! lenient and cannot fail: leaves without a string form (null) become `""`.
//! [`Flattener`] with [`FlattenOptions::strict`] reports those as errors instead.

use std::collections::BTreeMap;
use std::convert::Infallible;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::constants::{COMPONENT_KEY, DATA_KEY, PATH_SEPARATOR};
use crate::core::VracfgError;
use crate::mapper::PropertyMapper;
use crate::scalar::{conv_to_string, try_conv_to_string, value_kind};

/// Dotted path to stringified scalar.
pub type FlattenedMap = BTreeMap<String, String>;

/// Result of flattening one resource data map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedData {
    /// Value of the top-level `Component` field, if present and non-empty.
    pub component_name: Option<String>,
    /// Flattened properties, without the `Component` field.
    pub properties: FlattenedMap,
}

/// Options controlling how a [`Flattener`] treats values it cannot render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenOptions {
    /// Fail on leaves with no string form and on `data` payloads that are not maps.
    pub strict: bool,
}

impl FlattenOptions {
    /// Lenient options (the default).
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            strict: false,
        }
    }

    /// Strict options.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            strict: true,
        }
    }
}

/// Flattens resource data maps with a given property mapper and options.
#[derive(Debug, Clone, Copy)]
pub struct Flattener<'a> {
    mapper: &'a PropertyMapper,
    options: FlattenOptions,
}

impl<'a> Flattener<'a> {
    /// A lenient flattener using `mapper` for top-level keys.
    #[must_use]
    pub const fn new(mapper: &'a PropertyMapper) -> Self {
        Self {
            mapper,
            options: FlattenOptions::lenient(),
        }
    }

    /// Replace the options.
    #[must_use]
    pub const fn with_options(mut self, options: FlattenOptions) -> Self {
        self.options = options;
        self
    }

    /// The options in effect.
    #[must_use]
    pub const fn options(&self) -> FlattenOptions {
        self.options
    }

    /// Flatten a top-level resource data map.
    ///
    /// # Errors
    ///
    /// Only in strict mode: [`VracfgError::UnsupportedValue`] for a leaf with no
    /// string form, [`VracfgError::UnexpectedShape`] for a `data` payload that is
    /// not a map.
    pub fn parse_data_map(&self, data: &Map<String, Value>) -> Result<ParsedData, VracfgError> {
        if self.options.strict {
            walk_data_map::<Strict>(self.mapper, data)
        } else {
            walk_data_map::<Lenient>(self.mapper, data).map_err(absurd)
        }
    }

    /// Flatten a nested map under `prefix` into `out`.
    ///
    /// # Errors
    ///
    /// As for [`Flattener::parse_data_map`].
    pub fn parse_map(
        &self,
        prefix: &str,
        out: &mut FlattenedMap,
        data: &Map<String, Value>,
    ) -> Result<(), VracfgError> {
        if self.options.strict {
            walk_map::<Strict>(prefix, out, data)
        } else {
            walk_map::<Lenient>(prefix, out, data).map_err(absurd)
        }
    }

    /// Flatten an array under `prefix` into `out`.
    ///
    /// # Errors
    ///
    /// As for [`Flattener::parse_data_map`].
    pub fn parse_array(
        &self,
        prefix: &str,
        out: &mut FlattenedMap,
        data: &[Value],
    ) -> Result<(), VracfgError> {
        if self.options.strict {
            walk_array::<Strict>(prefix, out, data)
        } else {
            walk_array::<Lenient>(prefix, out, data).map_err(absurd)
        }
    }
}

/// Flatten a resource data map leniently.
///
/// Returns the component name and the flattened properties.
#[must_use]
pub fn parse_data_map(data: &Map<String, Value>, mapper: &PropertyMapper) -> ParsedData {
    match walk_data_map::<Lenient>(mapper, data) {
        Ok(parsed) => parsed,
        Err(never) => match never {},
    }
}

/// Flatten a nested map under `prefix` into `out` leniently.
pub fn parse_map(prefix: &str, out: &mut FlattenedMap, data: &Map<String, Value>) {
    match walk_map::<Lenient>(prefix, out, data) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Flatten an array under `prefix` into `out` leniently.
pub fn parse_array(prefix: &str, out: &mut FlattenedMap, data: &[Value]) {
    match walk_array::<Lenient>(prefix, out, data) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

fn absurd(never: Infallible) -> VracfgError {
    match never {}
}

/// How the walk treats values it cannot render.
trait LeafPolicy {
    type Error;

    fn leaf(path: &str, value: &Value) -> Result<String, Self::Error>;

    /// Called when an array element's `data` payload is not a map.
    fn odd_payload(path: &str, payload: &Value) -> Result<(), Self::Error>;
}

struct Lenient;

impl LeafPolicy for Lenient {
    type Error = Infallible;

    fn leaf(path: &str, value: &Value) -> Result<String, Infallible> {
        if matches!(value, Value::Null) {
            debug!(path, "rendering null value as empty string");
        }
        Ok(conv_to_string(value))
    }

    fn odd_payload(path: &str, payload: &Value) -> Result<(), Infallible> {
        debug!(path, kind = value_kind(payload), "flattening non-map data payload in place");
        Ok(())
    }
}

struct Strict;

impl LeafPolicy for Strict {
    type Error = VracfgError;

    fn leaf(path: &str, value: &Value) -> Result<String, VracfgError> {
        try_conv_to_string(value, path)
    }

    fn odd_payload(path: &str, payload: &Value) -> Result<(), VracfgError> {
        Err(VracfgError::UnexpectedShape {
            path: path.to_string(),
            expected: "mapping",
            found: value_kind(payload),
        })
    }
}

fn join(prefix: &str, segment: impl std::fmt::Display) -> String {
    format!("{prefix}{PATH_SEPARATOR}{segment}")
}

fn walk_data_map<P: LeafPolicy>(
    mapper: &PropertyMapper,
    data: &Map<String, Value>,
) -> Result<ParsedData, P::Error> {
    let mut parsed = ParsedData::default();

    for (key, value) in data {
        // Extracted, not flattened: a value with no string form means no component.
        if key == COMPONENT_KEY {
            let name = conv_to_string(value);
            if name.is_empty() {
                debug!(kind = value_kind(value), "resource data has no component name");
            } else {
                parsed.component_name = Some(name);
            }
            continue;
        }

        let key = mapper.resolve(key);
        walk_value::<P>(key.to_string(), &mut parsed.properties, value)?;
    }

    debug!(
        component = parsed.component_name.as_deref().unwrap_or(""),
        properties = parsed.properties.len(),
        "flattened resource data"
    );
    Ok(parsed)
}

fn walk_value<P: LeafPolicy>(
    path: String,
    out: &mut FlattenedMap,
    value: &Value,
) -> Result<(), P::Error> {
    match value {
        Value::Array(items) => walk_array::<P>(&path, out, items),
        Value::Object(map) => walk_map::<P>(&path, out, map),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            let rendered = P::leaf(&path, value)?;
            if let Some(previous) = out.insert(path, rendered) {
                trace!(previous = previous.as_str(), "overwrote flattened value");
            }
            Ok(())
        }
    }
}

fn walk_map<P: LeafPolicy>(
    prefix: &str,
    out: &mut FlattenedMap,
    data: &Map<String, Value>,
) -> Result<(), P::Error> {
    for (key, value) in data {
        walk_value::<P>(join(prefix, key), out, value)?;
    }
    Ok(())
}

fn walk_array<P: LeafPolicy>(
    prefix: &str,
    out: &mut FlattenedMap,
    data: &[Value],
) -> Result<(), P::Error> {
    for (index, item) in data.iter().enumerate() {
        let path = join(prefix, index);
        match item {
            Value::Object(element) => match element.get(DATA_KEY) {
                Some(Value::Object(payload)) => walk_map::<P>(&path, out, payload)?,
                Some(payload) => {
                    P::odd_payload(&path, payload)?;
                    walk_value::<P>(path, out, payload)?;
                }
                None => trace!(path = path.as_str(), "skipping array element without data"),
            },
            Value::Array(_)
            | Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_) => walk_value::<P>(path, out, item)?,
        }
    }
    Ok(())
}
