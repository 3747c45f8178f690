//! Init command

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use wneud_core::config::defaults::{
    DEFAULT_CONFIG_TEMPLATE, DEFAULT_CONFIG_TOML, DEFAULT_CONFIG_TOML_TEMPLATE,
    DEFAULT_CONFIG_YAML,
};

use crate::cli::output::{path_style, success};
use crate::cli::Cli;

/// Create a default configuration file
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Write TOML instead of YAML
    #[arg(long)]
    pub toml: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, toml = self.toml, "executing init command");
        let cwd = std::env::current_dir()?;
        let config_path = self.write_config(&cwd)?;

        if !cli.quiet {
            success(&format!(
                "Created configuration at {}",
                path_style().apply_to(config_path.display())
            ));
        }

        Ok(())
    }

    fn write_config(&self, cwd: &Path) -> anyhow::Result<PathBuf> {
        let (default_name, content) = if self.toml {
            (DEFAULT_CONFIG_TOML, DEFAULT_CONFIG_TOML_TEMPLATE)
        } else {
            (DEFAULT_CONFIG_YAML, DEFAULT_CONFIG_TEMPLATE)
        };
        let config_path = self
            .output
            .as_ref()
            .map(|p| cwd.join(p))
            .unwrap_or_else(|| cwd.join(default_name));

        if config_path.exists() && !self.force {
            anyhow::bail!(
                "Configuration file already exists at {}. Use --force to overwrite.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, content)?;
        Ok(config_path)
    }
}
