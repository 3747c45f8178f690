//! Changelog generation

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, instrument};
use wneud_core::config::DEFAULT_VERSION;
use wneud_core::ChangelogError;

use crate::formatter::{ChangelogFormatter, RstFormatter};
use crate::scanner::find_fragments;
use crate::types::ChangeLog;

/// Changelog generator
pub struct ChangelogGenerator {
    formatter: Arc<dyn ChangelogFormatter>,
    repository: String,
    version: String,
}

impl ChangelogGenerator {
    /// Create a new generator for a repository, rendering reStructuredText
    pub fn new(repository: impl Into<String>) -> Self {
        Self {
            formatter: Arc::new(RstFormatter::new()),
            repository: repository.into(),
            version: DEFAULT_VERSION.to_string(),
        }
    }

    /// Set the version shown in the title
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    /// Use a shared formatter, e.g. one looked up in a `FormatterRegistry`
    pub fn with_shared_formatter(mut self, formatter: Arc<dyn ChangelogFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Scan a fragments directory and build the changelog
    #[instrument(skip(self, fragments_dir), fields(dir = %fragments_dir.display(), version = %self.version))]
    pub fn generate(
        &self,
        fragments_dir: &Path,
        release_date: NaiveDate,
    ) -> Result<ChangeLog, ChangelogError> {
        info!(repository = %self.repository, "generating changelog");
        let grouped = find_fragments(fragments_dir)?;
        let changelog = ChangeLog::new(&self.version, release_date, &self.repository, grouped);

        debug!(
            section_count = changelog.sections().len(),
            fragment_count = changelog.fragment_count(),
            "changelog sections built"
        );
        Ok(changelog)
    }

    /// Format a changelog to string
    pub fn format(&self, changelog: &ChangeLog) -> String {
        self.formatter.format(changelog)
    }

    /// Format a changelog and write it to `out`
    pub fn render<W: Write + ?Sized>(
        &self,
        changelog: &ChangeLog,
        out: &mut W,
    ) -> Result<(), ChangelogError> {
        write_output(&self.format(changelog), out)
    }
}

/// Build the changelog for `repository` from the fragments in
/// `fragments_dir`, titled with the default version.
pub fn build_changelog(
    repository: &str,
    fragments_dir: &Path,
    release_date: NaiveDate,
) -> Result<ChangeLog, ChangelogError> {
    ChangelogGenerator::new(repository).generate(fragments_dir, release_date)
}

/// Render a changelog as reStructuredText into `out`
pub fn render<W: Write + ?Sized>(changelog: &ChangeLog, out: &mut W) -> Result<(), ChangelogError> {
    write_output(&RstFormatter::new().format(changelog), out)
}

fn write_output<W: Write + ?Sized>(output: &str, out: &mut W) -> Result<(), ChangelogError> {
    out.write_all(output.as_bytes())?;
    out.flush()?;
    debug!(output_len = output.len(), "changelog written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::{FormatterRegistry, MarkdownFormatter};
    use std::io;
    use tempfile::TempDir;

    fn release_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 2, 1).unwrap()
    }

    fn fragments(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (name, content) in files {
            std::fs::write(temp.path().join(name), content).unwrap();
        }
        temp
    }

    fn render_to_string(changelog: &ChangeLog) -> String {
        let mut buf = Vec::new();
        render(changelog, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_end_to_end() {
        let temp = fragments(&[
            ("5.bugfix.rst", "Fixed the thing"),
            ("3.feature.rst", "Added the thing"),
            ("notes.txt", "not a fragment"),
        ]);

        let changelog = ChangelogGenerator::new("example/project")
            .with_version("1.0")
            .generate(temp.path(), release_date())
            .unwrap();

        let expected = "
1.0 - 01-02-2020
----------------

Bugfix
^^^^^^

- Fixed the thing (`5 <https://github.com/example/project/issues/5>`_)

Feature
^^^^^^^

- Added the thing (`3 <https://github.com/example/project/issues/3>`_)
";
        assert_eq!(render_to_string(&changelog), expected);
    }

    #[test]
    fn test_build_changelog_defaults() {
        let temp = fragments(&[("12.misc.rst", "Tidied up\n")]);

        let changelog = build_changelog("example/project", temp.path(), release_date()).unwrap();

        assert_eq!(changelog.version(), "Unreleased");
        assert_eq!(changelog.repository(), "example/project");
        assert_eq!(changelog.release_date(), release_date());
        assert_eq!(changelog.sections().len(), 1);
        assert_eq!(changelog.sections()[0].fragments[0].issue_number, 12);
    }

    #[test]
    fn test_empty_directory_renders_title_only() {
        let temp = fragments(&[("README", "Put news fragments here")]);

        let changelog = build_changelog("example/project", temp.path(), release_date()).unwrap();

        assert!(changelog.is_empty());
        assert_eq!(
            render_to_string(&changelog),
            "\nUnreleased - 01-02-2020\n-----------------------\n"
        );
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = build_changelog("example/project", &temp.path().join("changes"), release_date());
        assert!(matches!(
            result,
            Err(ChangelogError::DirectoryUnreadable { .. })
        ));
    }

    #[test]
    fn test_sections_sorted_regardless_of_creation_order() {
        let temp = fragments(&[
            ("1.removal.rst", "r"),
            ("2.feature.rst", "f"),
            ("3.bugfix.rst", "b"),
            ("4.doc.rst", "d"),
        ]);

        let changelog = build_changelog("example/project", temp.path(), release_date()).unwrap();
        let output = render_to_string(&changelog);

        let positions: Vec<usize> = ["Bugfix", "Doc", "Feature", "Removal"]
            .iter()
            .map(|title| output.find(&format!("\n{}\n", title)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_render_is_deterministic() {
        let temp = fragments(&[
            ("5.bugfix.rst", "Fixed the thing"),
            ("6.bugfix.rst", "Fixed it\nproperly this time"),
            ("3.feature.rst", "Added the thing"),
        ]);

        let first = build_changelog("example/project", temp.path(), release_date()).unwrap();
        let second = build_changelog("example/project", temp.path(), release_date()).unwrap();

        assert_eq!(first, second);
        assert_eq!(render_to_string(&first), render_to_string(&first));
        assert_eq!(render_to_string(&first), render_to_string(&second));
    }

    #[test]
    fn test_multiline_continuation_indent() {
        let temp = fragments(&[("7.feature.rst", "Line one\nLine two\nLine three\n")]);

        let changelog = build_changelog("example/project", temp.path(), release_date()).unwrap();
        let output = render_to_string(&changelog);

        assert!(output.contains("\n- Line one\n  Line two\n  Line three (`7 <"));
    }

    #[test]
    fn test_generator_with_markdown() {
        let temp = fragments(&[("3.feature.rst", "Added the thing")]);
        let generator = ChangelogGenerator::new("example/project").with_formatter(MarkdownFormatter::new());

        let changelog = generator.generate(temp.path(), release_date()).unwrap();
        let mut buf = Vec::new();
        generator.render(&changelog, &mut buf).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("## Unreleased - 01-02-2020\n"));
        assert!(output.contains("[#3](https://github.com/example/project/issues/3)"));
    }

    #[test]
    fn test_generator_with_registry_formatter() {
        let temp = fragments(&[("3.feature.rst", "Added the thing")]);
        let formatter = FormatterRegistry::new().require("md").unwrap();
        let generator = ChangelogGenerator::new("example/project")
            .with_version("0.2.0")
            .with_shared_formatter(formatter);

        let changelog = generator.generate(temp.path(), release_date()).unwrap();

        assert!(generator
            .format(&changelog)
            .starts_with("## 0.2.0 - 01-02-2020\n\n### Feature\n"));
    }

    #[test]
    fn test_changelog_serializes() {
        let temp = fragments(&[("3.feature.rst", "Added the thing")]);
        let changelog = build_changelog("example/project", temp.path(), release_date()).unwrap();

        let json = serde_json::to_value(&changelog).unwrap();

        assert_eq!(json["version"], "Unreleased");
        assert_eq!(json["release_date"], "2020-02-01");
        assert_eq!(json["sections"][0]["kind"], "feature");
        assert_eq!(json["sections"][0]["fragments"][0]["issue_number"], 3);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_propagates() {
        let changelog = ChangeLog::new(
            "1.0",
            release_date(),
            "example/project",
            Default::default(),
        );

        let err = render(&changelog, &mut BrokenPipe).unwrap_err();
        assert!(matches!(err, ChangelogError::WriteFailed(_)));
    }
}
