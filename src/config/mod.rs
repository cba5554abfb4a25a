//! Configuration management for vracfg.
//!
//! There is a single, optional configuration file describing how API data is
//! flattened: whether unsupported values are errors, and which top-level
//! field renames to apply on top of (or instead of) the built-in table.
//!
//! # Location Priority
//!
//! 1. `--config <PATH>` on the command line
//! 2. `VRACFG_CONFIG` environment variable
//! 3. Platform default: `~/.vracfg/config.toml` (Windows: `%LOCALAPPDATA%\vracfg\config.toml`)
//!
//! A missing file is not an error; every setting has a default.
//!
//! # Modules
//!
//! - `adapter` - [`AdapterConfig`], its file format and conversion into a
//!   [`crate::PropertyMapper`] and [`crate::FlattenOptions`]
//! - `parser` - generic TOML parsing with file path context
//!
//! # Examples
//!
//! ```rust,no_run
//! use vracfg::config::AdapterConfig;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AdapterConfig::load_with_optional(None)?;
//! let mapper = config.property_mapper();
//! println!("{} property mappings in effect", mapper.len());
//! # Ok(())
//! # }
//! ```

mod adapter;
mod parser;

pub use adapter::AdapterConfig;
pub use parser::parse_config;
