//! Formatter registry

use std::sync::Arc;

use wneud_core::ChangelogError;

use super::{ChangelogFormatter, MarkdownFormatter, RstFormatter};

/// Registry of available changelog formatters
pub struct FormatterRegistry {
    formatters: Vec<Arc<dyn ChangelogFormatter>>,
}

impl FormatterRegistry {
    /// Create a new registry with all built-in formatters
    pub fn new() -> Self {
        Self {
            formatters: vec![
                Arc::new(RstFormatter::new()),
                Arc::new(MarkdownFormatter::new()),
            ],
        }
    }

    /// Get formatter by name or file extension
    pub fn get(&self, name: &str) -> Option<Arc<dyn ChangelogFormatter>> {
        self.formatters
            .iter()
            .find(|f| f.name() == name || f.extension() == name)
            .cloned()
    }

    /// Get formatter by name or file extension, failing for unknown names
    pub fn require(&self, name: &str) -> Result<Arc<dyn ChangelogFormatter>, ChangelogError> {
        self.get(name)
            .ok_or_else(|| ChangelogError::UnknownFormat(name.to_string()))
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
