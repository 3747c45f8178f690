//! Changelog types

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

/// Date format used in changelog titles (DD-MM-YYYY)
pub const RELEASE_DATE_FORMAT: &str = "%d-%m-%Y";

/// Fragments grouped by type token, ordered by token
pub type GroupedFragments = BTreeMap<String, Vec<Fragment>>;

/// A single news fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    /// Issue the change refers to
    pub issue_number: u64,
    /// Fragment text, without trailing line terminators
    pub content: String,
}

impl Fragment {
    /// Create a new fragment
    pub fn new(issue_number: u64, content: impl Into<String>) -> Self {
        Self {
            issue_number,
            content: content.into(),
        }
    }

    /// Content with continuation lines indented by two spaces, so a
    /// multi-line body stays inside its list item
    pub fn indented_content(&self) -> String {
        self.content.replace('\n', "\n  ")
    }
}

/// Fragments sharing a change type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Type token from the fragment file names
    pub kind: String,
    /// Fragments in the order they were found
    pub fragments: Vec<Fragment>,
}

impl Section {
    /// Check if section is empty
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Heading shown for this section
    pub fn title(&self) -> String {
        title_case(&self.kind)
    }
}

/// The changelog for one release.
///
/// Sections are kept sorted by type token and are not exposed mutably.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeLog {
    version: String,
    release_date: NaiveDate,
    repository: String,
    sections: Vec<Section>,
}

impl ChangeLog {
    /// Build a changelog from grouped fragments
    pub fn new(
        version: impl Into<String>,
        release_date: NaiveDate,
        repository: impl Into<String>,
        grouped: GroupedFragments,
    ) -> Self {
        let sections = grouped
            .into_iter()
            .map(|(kind, fragments)| Section { kind, fragments })
            .collect();

        Self {
            version: version.into(),
            release_date,
            repository: repository.into(),
            sections,
        }
    }

    /// Version shown in the title
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Release date
    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    /// Release date as DD-MM-YYYY
    pub fn formatted_date(&self) -> String {
        self.release_date.format(RELEASE_DATE_FORMAT).to_string()
    }

    /// Repository identifier (owner/name)
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Sections, sorted by type token
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Link to an issue in the tracker of this repository
    pub fn issue_url(&self, issue_number: u64) -> String {
        format!(
            "https://github.com/{}/issues/{}",
            self.repository, issue_number
        )
    }

    /// Total number of fragments across all sections
    pub fn fragment_count(&self) -> usize {
        self.sections.iter().map(|s| s.fragments.len()).sum()
    }

    /// Check if the changelog has no fragments
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(Section::is_empty)
    }
}

/// Upper-case the first letter of every word.
///
/// A word starts after any character that is not alphanumeric or `_`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }

    out
}
