//! Host-tool schema declaration for `resource_configuration`.
//!
//! The infrastructure-as-code tool declares the attribute as a set of records:
//!
//! ```text
//! resource_configuration   set of block   optional, computed
//!   configuration          map of string  optional, computed
//!   name                   string         required
//! ```
//!
//! [`resource_configuration_schema`] returns that declaration. Besides being
//! printable (`vracfg schema`), the record [`Block`] checks the basic type tags of
//! raw input entries before they are expanded. It does not look inside the
//! configuration map.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use strsim::levenshtein;

use crate::constants::{CONFIGURATION_FIELD, NAME_FIELD};
use crate::scalar::value_kind;

/// Maximum Levenshtein distance, as a percentage of the field name length,
/// for a present key to be offered as a "did you mean" hint.
const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// Type of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttributeType {
    /// A string.
    String,
    /// A map with string keys and elements of `elem`.
    Map {
        /// Element type
        elem: Box<AttributeType>,
    },
    /// A set of nested records.
    Set {
        /// Record schema
        block: Block,
    },
}

impl AttributeType {
    fn tag(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Map {
                ..
            } => "mapping",
            Self::Set {
                ..
            } => "sequence",
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::String, Value::String(_))
                | (Self::Map { .. }, Value::Object(_))
                | (Self::Set { .. }, Value::Array(_))
        )
    }
}

/// A single attribute declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Attribute type
    #[serde(flatten)]
    pub kind: AttributeType,
    /// Must be set by the user
    pub required: bool,
    /// May be set by the user
    pub optional: bool,
    /// May be filled in by the provider
    pub computed: bool,
}

impl Attribute {
    /// A required string.
    #[must_use]
    pub const fn required_string() -> Self {
        Self {
            kind: AttributeType::String,
            required: true,
            optional: false,
            computed: false,
        }
    }

    /// An optional, computed map of strings.
    #[must_use]
    pub fn computed_map_of_string() -> Self {
        Self {
            kind: AttributeType::Map {
                elem: Box::new(AttributeType::String),
            },
            required: false,
            optional: true,
            computed: true,
        }
    }

    /// An optional, computed set of records.
    #[must_use]
    pub const fn computed_set_of(block: Block) -> Self {
        Self {
            kind: AttributeType::Set {
                block,
            },
            required: false,
            optional: true,
            computed: true,
        }
    }

    /// The record schema, for set attributes.
    #[must_use]
    pub const fn block(&self) -> Option<&Block> {
        match &self.kind {
            AttributeType::Set {
                block,
            } => Some(block),
            _ => None,
        }
    }
}

/// Schema of a nested record: named attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Block {
    /// Attributes by name
    pub attributes: BTreeMap<String, Attribute>,
}

impl Block {
    /// An empty block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    /// Look up an attribute.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Check that `entry` is a record matching this block's type tags.
    ///
    /// Required attributes must be present; present attributes must have the
    /// declared kind. Unknown keys are ignored. The error is a human-readable
    /// reason suitable for [`crate::core::VracfgError::InvalidResourceConfiguration`].
    pub fn check_entry(&self, entry: &Value) -> Result<(), String> {
        let Value::Object(record) = entry else {
            return Err(format!("expected a mapping, found {}", value_kind(entry)));
        };

        for (name, attribute) in &self.attributes {
            match record.get(name) {
                None if attribute.required => {
                    let mut reason = format!("missing required field '{name}'");
                    if let Some(hint) = closest_key(name, record.keys()) {
                        reason.push_str(&format!(" (did you mean '{hint}'?)"));
                    }
                    return Err(reason);
                }
                None => {}
                Some(value) if !attribute.kind.accepts(value) => {
                    return Err(format!(
                        "field '{name}' must be a {}, found {}",
                        attribute.kind.tag(),
                        value_kind(value)
                    ));
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}

/// The `resource_configuration` attribute declaration.
#[must_use]
pub fn resource_configuration_schema() -> Attribute {
    Attribute::computed_set_of(
        Block::new()
            .with_attribute(CONFIGURATION_FIELD, Attribute::computed_map_of_string())
            .with_attribute(NAME_FIELD, Attribute::required_string()),
    )
}

fn closest_key<'a>(target: &str, keys: impl Iterator<Item = &'a String>) -> Option<&'a str> {
    keys.filter(|key| key.as_str() != target)
        .map(|key| (key, levenshtein(&target.to_lowercase(), &key.to_lowercase())))
        .filter(|(_, dist)| *dist <= target.len() * SIMILARITY_THRESHOLD_PERCENT / 100)
        .min_by_key(|(_, dist)| *dist)
        .map(|(key, _)| key.as_str())
}
