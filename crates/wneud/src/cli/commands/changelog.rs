//! Changelog command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;
use tracing::info;

use wneud_changelog::{ChangelogGenerator, FormatterRegistry};
use wneud_core::config::{load_config_or_default, validate_changelog, ChangelogConfig};

use crate::cli::output::{path_style, success, warning};
use crate::cli::{Cli, OutputFormat};

/// Write a draft changelog entry for the next release
#[derive(Debug, Args)]
pub struct ChangelogCommand {
    /// Version shown in the changelog title
    #[arg(long = "for-version", value_name = "VERSION")]
    pub for_version: Option<String>,

    /// Release date (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Directory holding the news fragments
    #[arg(long = "dir", value_name = "PATH")]
    pub fragments_dir: Option<PathBuf>,

    /// Repository used for issue links
    #[arg(long, env = "GITHUB_REPOSITORY", value_name = "OWNER/NAME")]
    pub repository: Option<String>,

    /// Changelog markup (rst, markdown)
    #[arg(long, value_name = "STYLE")]
    pub style: Option<String>,

    /// Output file (default: print to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("expected a date like 2020-02-01: {}", e))
}

impl ChangelogCommand {
    /// Execute the changelog command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(version = ?self.for_version, date = ?self.date, "executing changelog command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd)?;

        let settings = self.apply_overrides(config.changelog);
        validate_changelog(&settings)?;

        let formatter = FormatterRegistry::new().require(&settings.format)?;
        let release_date = self.date.unwrap_or_else(|| Local::now().date_naive());
        let fragments_dir = cwd.join(&settings.directory);
        info!(repository = %settings.repository, dir = %fragments_dir.display(), "resolved changelog settings");

        let generator = ChangelogGenerator::new(&settings.repository)
            .with_version(&settings.version)
            .with_shared_formatter(formatter);
        let changelog = generator.generate(&fragments_dir, release_date)?;

        if changelog.is_empty() && !cli.quiet {
            warning(&format!(
                "No news fragments found in {}",
                path_style().apply_to(fragments_dir.display())
            ));
        }

        let mut out: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(io::stdout().lock()),
        };

        match cli.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut out, &changelog)?;
                writeln!(out)?;
                out.flush()?;
            }
            OutputFormat::Text => generator.render(&changelog, &mut out)?,
        }

        if let Some(path) = &self.output {
            if !cli.quiet {
                success(&format!(
                    "Changelog written to {}",
                    path_style().apply_to(path.display())
                ));
            }
        }

        Ok(())
    }

    /// Layer command-line values over the configured ones
    fn apply_overrides(&self, mut settings: ChangelogConfig) -> ChangelogConfig {
        if let Some(version) = &self.for_version {
            settings.version = version.clone();
        }
        if let Some(dir) = &self.fragments_dir {
            settings.directory = dir.clone();
        }
        if let Some(repository) = &self.repository {
            settings.repository = repository.clone();
        }
        if let Some(style) = &self.style {
            settings.format = style.clone();
        }
        settings
    }
}
