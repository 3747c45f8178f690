//! Markdown changelog formatter

use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::types::ChangeLog;

/// Markdown changelog formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, changelog), fields(version = %changelog.version(), section_count = changelog.sections().len()))]
    fn format(&self, changelog: &ChangeLog) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "## {} - {}\n\n",
            changelog.version(),
            changelog.formatted_date()
        ));

        for section in changelog.sections() {
            if section.is_empty() {
                continue;
            }

            output.push_str(&format!("### {}\n\n", section.title()));

            for fragment in &section.fragments {
                output.push_str(&format!(
                    "- {} ([#{}]({}))\n",
                    fragment.indented_content(),
                    fragment.issue_number,
                    changelog.issue_url(fragment.issue_number)
                ));
            }

            output.push('\n');
        }

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }

    fn name(&self) -> &'static str {
        "markdown"
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Fragment, GroupedFragments};
    use chrono::NaiveDate;

    #[test]
    fn test_format_basic() {
        let mut grouped = GroupedFragments::new();
        grouped.insert("feature".to_string(), vec![Fragment::new(3, "Added the thing")]);
        let changelog = ChangeLog::new(
            "1.0.0",
            NaiveDate::from_ymd_opt(2020, 2, 1).unwrap(),
            "example/project",
            grouped,
        );

        let output = MarkdownFormatter::new().format(&changelog);

        assert_eq!(
            output,
            "## 1.0.0 - 01-02-2020\n\n### Feature\n\n- Added the thing ([#3](https://github.com/example/project/issues/3))\n\n"
        );
    }

    #[test]
    fn test_format_empty() {
        let changelog = ChangeLog::new(
            "1.0.0",
            NaiveDate::from_ymd_opt(2020, 2, 1).unwrap(),
            "example/project",
            GroupedFragments::new(),
        );

        let output = MarkdownFormatter::new().format(&changelog);

        assert_eq!(output, "## 1.0.0 - 01-02-2020\n\n");
    }
}
