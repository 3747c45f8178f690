//! reStructuredText changelog formatter

use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::types::ChangeLog;

/// reStructuredText changelog formatter.
///
/// Produces a `-` underlined release title, one `^` underlined heading per
/// section, and one bullet per fragment citing its issue with an embedded
/// hyperlink.
#[derive(Debug, Clone, Copy, Default)]
pub struct RstFormatter;

impl RstFormatter {
    /// Create a new reStructuredText formatter
    pub fn new() -> Self {
        Self
    }
}

fn underline(c: char, len: usize) -> String {
    std::iter::repeat(c).take(len).collect()
}

impl ChangelogFormatter for RstFormatter {
    #[instrument(skip(self, changelog), fields(version = %changelog.version(), section_count = changelog.sections().len()))]
    fn format(&self, changelog: &ChangeLog) -> String {
        let mut output = String::new();

        // Title
        let version = changelog.version();
        let date = changelog.formatted_date();
        let title_len = version.chars().count() + date.chars().count() + 3;
        output.push('\n');
        output.push_str(&format!("{} - {}\n", version, date));
        output.push_str(&underline('-', title_len));
        output.push('\n');

        // Sections
        for section in changelog.sections() {
            let title = section.title();
            output.push_str(&format!("\n{}\n", title));
            output.push_str(&underline('^', title.chars().count()));
            output.push('\n');

            for fragment in &section.fragments {
                output.push_str(&format!(
                    "\n- {} (`{} <{}>`_)",
                    fragment.indented_content(),
                    fragment.issue_number,
                    changelog.issue_url(fragment.issue_number)
                ));
            }

            output.push('\n');
        }

        debug!(output_len = output.len(), "rst changelog formatted");
        output
    }

    fn name(&self) -> &'static str {
        "rst"
    }

    fn extension(&self) -> &'static str {
        "rst"
    }
}
