//! `vracfg config`: manage the adapter configuration file.
//!
//! ```bash
//! vracfg config init            # write an example config
//! vracfg config init --force    # overwrite an existing one
//! vracfg config show            # print the effective config as TOML
//! vracfg config path            # print where the config is looked up
//! ```

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::AdapterConfig;

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: Option<ConfigSubcommands>,
}

#[derive(Subcommand, Debug)]
enum ConfigSubcommands {
    /// Write an example configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Show,

    /// Show the configuration file path
    Path,
}

impl ConfigCommand {
    pub fn execute(self, config_path: Option<PathBuf>) -> Result<()> {
        match self.command {
            Some(ConfigSubcommands::Init {
                force,
            }) => Self::init(force, config_path),
            Some(ConfigSubcommands::Show) | None => Self::show(config_path),
            Some(ConfigSubcommands::Path) => Self::show_path(config_path),
        }
    }

    fn init(force: bool, config_path: Option<PathBuf>) -> Result<()> {
        let config_path = AdapterConfig::resolve_path(config_path)?;

        if config_path.exists() && !force {
            println!("❌ Config already exists at: {}", config_path.display());
            println!("   Use --force to overwrite");
            return Ok(());
        }

        let config = AdapterConfig::init_example();
        config.save_to(&config_path)?;

        println!("✅ Created config at: {}", config_path.display());
        println!("\n{}", "Example configuration:".bold());
        println!("{}", toml::to_string_pretty(&config).context("Failed to render config")?);
        println!("\n{}", "Next steps:".yellow());
        println!("  1. Add renames for your blueprint's custom properties under [mappings]");
        println!("  2. Set strict = true to fail on values with no string form");

        Ok(())
    }

    fn show(config_path: Option<PathBuf>) -> Result<()> {
        let path = AdapterConfig::resolve_path(config_path)?;
        let config = AdapterConfig::load_with_optional(Some(path.clone()))?;

        println!("{}", "Adapter Configuration".bold());
        if path.exists() {
            println!("Location: {}\n", path.display());
        } else {
            println!("Location: {} {}\n", path.display(), "(not found, using defaults)".dimmed());
        }

        print!("{}", render_effective(&config)?);
        if config.mappings.is_empty() {
            println!("\nNo custom mappings configured.");
        }

        Ok(())
    }

    fn show_path(config_path: Option<PathBuf>) -> Result<()> {
        let path = AdapterConfig::resolve_path(config_path)?;
        println!("{}", path.display());
        Ok(())
    }
}

/// The config as TOML, with `use_builtin_mappings` spelled out even when it
/// holds its default.
fn render_effective(config: &AdapterConfig) -> Result<String> {
    let mut rendered = toml::to_string_pretty(config).context("Failed to render config")?;
    if config.use_builtin_mappings {
        rendered.insert_str(0, "use_builtin_mappings = true\n");
    }
    Ok(rendered)
}
