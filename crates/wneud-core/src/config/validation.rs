//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::defaults::KNOWN_FORMATS;
use super::types::{ChangelogConfig, Config};

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(&config.changelog)?;
    debug!("configuration validation passed");
    Ok(())
}

/// Validate the changelog section on its own.
///
/// The CLI calls this again after command-line overrides are applied.
pub fn validate_changelog(changelog: &ChangelogConfig) -> Result<()> {
    validate_repository(&changelog.repository)?;

    if changelog.directory.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.directory".to_string(),
            message: "directory cannot be empty".to_string(),
        }
        .into());
    }

    if !KNOWN_FORMATS.contains(&changelog.format.as_str()) {
        return Err(ConfigError::InvalidValue {
            field: "changelog.format".to_string(),
            message: format!("must be one of: {}", KNOWN_FORMATS.join(", ")),
        }
        .into());
    }

    Ok(())
}

/// Check that a repository identifier has the `owner/name` shape
pub fn validate_repository(repository: &str) -> Result<()> {
    let valid = matches!(
        repository.split_once('/'),
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/')
    );

    if !valid {
        return Err(ConfigError::InvalidValue {
            field: "changelog.repository".to_string(),
            message: format!("'{}' is not of the form owner/name", repository),
        }
        .into());
    }

    Ok(())
}
