//! Generic TOML parsing with file path context.

use anyhow::{Context, Result};
use std::path::Path;

/// Parse a TOML file into any [`serde::de::DeserializeOwned`] type.
///
/// Both the read and the parse failure carry the file path:
///
/// ```text
/// Failed to parse config file: /home/me/.vracfg/config.toml
/// Caused by:
///     invalid type: string "yes", expected a boolean
/// ```
///
/// # Examples
///
/// ```rust,no_run
/// use vracfg::config::{AdapterConfig, parse_config};
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let config: AdapterConfig = parse_config(Path::new("config.toml"))?;
/// println!("strict: {}", config.strict);
/// # Ok(())
/// # }
/// ```
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: T = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}
