//! Command-line interface for vracfg.
//!
//! # Commands
//!
//! - `flatten` - flatten an API data map, or a list of resource configurations
//! - `expand` - validate and normalize a list of resource configurations
//! - `mappings` - print the effective property-name mapping table
//! - `schema` - print the `resource_configuration` schema declaration
//! - `config` - manage the adapter configuration file
//!
//! # Global Options
//!
//! - `--verbose` / `-v`: debug logging
//! - `--quiet` / `-q`: no logging at all
//! - `--config` / `-c`: adapter config file (also `VRACFG_CONFIG`)
//!
//! Logging goes to stderr so that stdout stays a clean JSON/YAML document.
//! `RUST_LOG` takes precedence over the flags when set.
//!
//! # Examples
//!
//! ```bash
//! # Flatten a deployment resource's data as returned by the API
//! vracfg flatten resource-data.json
//!
//! # Same, from stdin, as YAML, failing on null leaves
//! curl -s ... | vracfg flatten --strict --format yaml
//!
//! # Check resource_configuration blocks before they are sent
//! vracfg expand resource-configuration.yaml
//! ```

mod common;
mod config;
mod expand;
mod flatten;
mod mappings;
mod schema;


pub use common::OutputFormat;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Settings derived from the global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level for the subscriber, `None` disables logging.
    pub log_level: Option<String>,

    /// Explicit adapter config path.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber.
    ///
    /// Safe to call more than once; later calls are no-ops.
    pub fn init_logging(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if let Some(level) = &self.log_level {
            EnvFilter::new(format!("vracfg={level}"))
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init();
    }
}

/// Top-level argument parser.
#[derive(Parser)]
#[command(
    name = "vracfg",
    about = "Flatten and expand vRA resource configurations",
    version,
    long_about = "vracfg reshapes vRealize Automation resource data between the nested form \
                  returned by the API and the flat, dotted-path string map stored in \
                  infrastructure-as-code state."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable all logging
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to the adapter config file
    #[arg(short, long, global = true, env = "VRACFG_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Flatten an API data map or a list of resource configurations
    Flatten(flatten::FlattenCommand),

    /// Validate and normalize a list of resource configurations
    Expand(expand::ExpandCommand),

    /// Print the effective property-name mapping table
    Mappings(mappings::MappingsCommand),

    /// Print the resource_configuration schema declaration
    Schema(schema::SchemaCommand),

    /// Manage the adapter configuration file
    Config(config::ConfigCommand),
}

impl Cli {
    /// Run the selected command.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config)
    }

    /// Translate the global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("info".to_string())
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
        }
    }

    /// Run the selected command with an explicit configuration.
    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::Flatten(cmd) => cmd.execute(config.config_path),
            Commands::Expand(cmd) => cmd.execute(),
            Commands::Mappings(cmd) => cmd.execute(config.config_path),
            Commands::Schema(cmd) => cmd.execute(),
            Commands::Config(cmd) => cmd.execute(config.config_path),
        }
    }
}
