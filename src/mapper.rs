//! Property-name mapping table.
//!
//! The provisioning API names machine properties in its own vocabulary
//! (`MachineCPU`, `MachineMemory`, ...). The host tool's schema wants short
//! snake_case keys. [`PropertyMapper`] translates the former into the latter for
//! the top-level keys of a resource data map.
//!
//! The mapper is an ordinary value passed to the flattening functions; there is
//! no process-wide table. Tests and callers can build synthetic mappers with
//! [`PropertyMapper::new`] and [`PropertyMapper::insert`], or start from the
//! [`PropertyMapper::builtin`] table and layer config overrides on top.

use std::collections::{BTreeMap, HashMap};

/// Built-in renames for vRA machine resource properties.
const BUILTIN_MAPPINGS: &[(&str, &str)] = &[
    ("MachineName", "name"),
    ("MachineDescription", "description"),
    ("MachineCPU", "cpu"),
    ("MachineMemory", "memory"),
    ("MachineStorage", "storage"),
    ("MachineStatus", "status"),
    ("MachineType", "type"),
    ("MachineId", "id"),
    ("MachineReservationName", "reservation_name"),
    ("MachineInterfaceType", "interface_type"),
    ("MachineGroupName", "group_name"),
    ("MachineBlueprintName", "blueprint_name"),
    ("MachineGuestOperatingSystem", "guest_operating_system"),
    ("MachineDailyCost", "daily_cost"),
    ("MachineDestructionDate", "destruction_date"),
    ("MachineExpirationDate", "expiration_date"),
    ("IPAddress", "ip_address"),
];

/// Lookup from raw API field name to canonical flattened key name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMapper {
    mappings: HashMap<String, String>,
}

impl PropertyMapper {
    /// An empty mapper; every key resolves to itself.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in vRA machine property table.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN_MAPPINGS.iter().map(|(raw, canonical)| (*raw, *canonical)).collect()
    }

    /// Layer `overrides` on top of this table. Overrides win on conflicts.
    #[must_use]
    pub fn with_overrides<K, V>(mut self, overrides: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (raw, canonical) in overrides {
            self.insert(raw, canonical);
        }
        self
    }

    /// Add or replace a single mapping. Returns the previous canonical name.
    pub fn insert(
        &mut self,
        raw: impl Into<String>,
        canonical: impl Into<String>,
    ) -> Option<String> {
        self.mappings.insert(raw.into(), canonical.into())
    }

    /// Canonical name for `raw`, if one is mapped.
    #[must_use]
    pub fn get(&self, raw: &str) -> Option<&str> {
        self.mappings.get(raw).map(String::as_str)
    }

    /// Canonical name for `raw`, or `raw` itself when unmapped.
    #[must_use]
    pub fn resolve<'a>(&'a self, raw: &'a str) -> &'a str {
        self.get(raw).unwrap_or(raw)
    }

    /// Number of mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Whether the table has no mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Mappings sorted by raw name.
    #[must_use]
    pub fn sorted(&self) -> BTreeMap<&str, &str> {
        self.mappings.iter().map(|(raw, canonical)| (raw.as_str(), canonical.as_str())).collect()
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyMapper
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new().with_overrides(iter)
    }
}
