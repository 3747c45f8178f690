//! Changelog formatters

mod markdown;
mod registry;
mod rst;

pub use markdown::MarkdownFormatter;
pub use registry::FormatterRegistry;
pub use rst::RstFormatter;

use crate::types::ChangeLog;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Format a changelog to string
    fn format(&self, changelog: &ChangeLog) -> String;

    /// Name used to select this format
    fn name(&self) -> &'static str;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}
