//! Adapter configuration (`~/.vracfg/config.toml`).
//!
//! ```toml
//! # Fail on values that have no string form instead of rendering them as ""
//! strict = false
//!
//! # Start from the built-in vRA machine property table
//! use_builtin_mappings = true
//!
//! # Extra or replacement renames for top-level API fields
//! [mappings]
//! "VirtualMachine.CPU.Count" = "cpu_count"
//! MachineCPU = "vcpu"
//! ```
//!
//! Every field is optional; a missing file means all defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::parse_config;
use crate::constants::CONFIG_PATH_ENV;
use crate::flatten::FlattenOptions;
use crate::mapper::PropertyMapper;

const fn default_true() -> bool {
    true
}

const fn is_true(value: &bool) -> bool {
    *value
}

/// Settings for flattening and property renaming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Fail on unsupported leaves and odd `data` payloads.
    #[serde(default)]
    pub strict: bool,

    /// Include the built-in property table below the user mappings.
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub use_builtin_mappings: bool,

    /// Raw API field name to canonical key name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mappings: BTreeMap<String, String>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            strict: false,
            use_builtin_mappings: true,
            mappings: BTreeMap::new(),
        }
    }
}

impl AdapterConfig {
    /// Resolve the config path: explicit path, then `VRACFG_CONFIG`, then the
    /// platform default.
    pub fn resolve_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path);
        }
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }
        Self::default_path()
    }

    /// Load from the resolved path; a missing file gives the defaults.
    pub fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(path = %path.display(), "no adapter config, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Self = parse_config(path)?;
        debug!(
            path = %path.display(),
            strict = config.strict,
            mappings = config.mappings.len(),
            "loaded adapter config"
        );
        Ok(config)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize adapter config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write adapter config to {}", path.display()))?;

        Ok(())
    }

    /// Platform default location.
    ///
    /// - Windows: `%LOCALAPPDATA%\vracfg\config.toml`
    /// - elsewhere: `~/.vracfg/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("vracfg")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".vracfg")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Build the property mapper these settings describe.
    #[must_use]
    pub fn property_mapper(&self) -> PropertyMapper {
        let base = if self.use_builtin_mappings {
            PropertyMapper::builtin()
        } else {
            PropertyMapper::new()
        };
        base.with_overrides(
            self.mappings.iter().map(|(raw, canonical)| (raw.as_str(), canonical.as_str())),
        )
    }

    /// Flatten options these settings describe.
    #[must_use]
    pub const fn flatten_options(&self) -> FlattenOptions {
        FlattenOptions {
            strict: self.strict,
        }
    }

    /// Example config written by `vracfg config init`.
    #[must_use]
    pub fn init_example() -> Self {
        let mut mappings = BTreeMap::new();
        mappings.insert("VirtualMachine.CPU.Count".to_string(), "cpu_count".to_string());
        mappings.insert("VirtualMachine.Memory.Size".to_string(), "memory_size".to_string());
        Self {
            strict: false,
            use_builtin_mappings: true,
            mappings,
        }
    }
}
