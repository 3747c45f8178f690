//! Error types for wneud

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using WneudError
pub type Result<T> = std::result::Result<T, WneudError>;

/// Main error type for wneud operations
#[derive(Debug, Error)]
pub enum WneudError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// The fragments directory could not be listed
    #[error("Unable to read fragments directory {path}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fragment file was listed but could not be read
    #[error("Unable to read fragment {path}: {source}")]
    FragmentUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No formatter is registered under this name
    #[error("Unknown changelog format: {0}")]
    UnknownFormat(String),

    /// Failed to write the rendered changelog
    #[error("Failed to write changelog: {0}")]
    WriteFailed(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changelog_error_converts() {
        let err: WneudError = ChangelogError::UnknownFormat("html".to_string()).into();
        assert!(matches!(err, WneudError::Changelog(_)));
        assert_eq!(err.to_string(), "Unknown changelog format: html");
    }

    #[test]
    fn test_fragment_error_keeps_source() {
        let err = ChangelogError::FragmentUnreadable {
            path: PathBuf::from("changes/1.bugfix.rst"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("changes/1.bugfix.rst"));
    }
}
