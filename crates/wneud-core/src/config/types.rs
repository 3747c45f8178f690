//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_FORMAT, DEFAULT_FRAGMENTS_DIR, DEFAULT_REPOSITORY, DEFAULT_VERSION,
};

/// Main configuration for wneud
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog configuration
    pub changelog: ChangelogConfig,
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Directory holding the news fragments
    pub directory: PathBuf,

    /// Repository identifier (`owner/name`) used for issue links
    pub repository: String,

    /// Version shown in the changelog title
    pub version: String,

    /// Output format (rst, markdown)
    pub format: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_FRAGMENTS_DIR),
            repository: DEFAULT_REPOSITORY.to_string(),
            version: DEFAULT_VERSION.to_string(),
            format: DEFAULT_FORMAT.to_string(),
        }
    }
}
