//! Version command

use clap::Args;
use tracing::info;

use crate::cli::{Cli, OutputFormat};

/// Print version number and exit
#[derive(Debug, Args)]
pub struct VersionCommand {}

impl VersionCommand {
    /// Execute the version command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!("executing version command");
        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({ "version": env!("CARGO_PKG_VERSION") });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => println!("{}", version_string()),
        }
        Ok(())
    }
}

fn version_string() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}
