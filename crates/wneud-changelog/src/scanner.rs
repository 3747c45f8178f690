//! News fragment discovery

use std::io;
use std::path::Path;

use tracing::{debug, info, instrument, trace};
use walkdir::WalkDir;
use wneud_core::ChangelogError;

use crate::types::{Fragment, GroupedFragments};

/// Extension every fragment file must carry
pub const FRAGMENT_EXTENSION: &str = ".rst";

/// Parse a fragment file name of the form `{issue}.{type}.rst`.
///
/// Returns the issue number and the type token, with `-` in the token
/// replaced by a space. Names that do not follow the pattern yield `None`;
/// they are not fragments and are not an error.
pub fn parse_fragment_name(file_name: &str) -> Option<(u64, String)> {
    let stem = file_name.strip_suffix(FRAGMENT_EXTENSION)?;

    let mut parts = stem.split('.');
    let (issue, kind) = match (parts.next(), parts.next(), parts.next()) {
        (Some(issue), Some(kind), None) => (issue, kind),
        _ => return None,
    };

    let issue_number: u64 = issue.parse().ok().filter(|n| *n > 0)?;
    if kind.is_empty() {
        return None;
    }

    Some((issue_number, kind.replace('-', " ")))
}

/// Scan a directory for news fragments and group them by type.
///
/// Entries are visited in file name order and are not descended into.
/// Within a type, fragments keep that order. A directory that cannot be
/// listed, or a fragment that cannot be read, aborts the scan.
#[instrument(skip(dir), fields(dir = %dir.display()))]
pub fn find_fragments(dir: &Path) -> Result<GroupedFragments, ChangelogError> {
    let metadata = std::fs::metadata(dir).map_err(|source| ChangelogError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(ChangelogError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source: io::Error::other("not a directory"),
        });
    }

    let mut grouped = GroupedFragments::new();
    let mut count = 0usize;

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| ChangelogError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source: io::Error::from(e),
        })?;

        let path = entry.path();
        if path.is_dir() {
            trace!(path = %path.display(), "skipping directory");
            continue;
        }

        let Some((issue_number, kind)) = entry.file_name().to_str().and_then(parse_fragment_name)
        else {
            debug!(path = %path.display(), "skipping non-fragment file");
            continue;
        };

        let data = std::fs::read_to_string(path).map_err(|source| {
            ChangelogError::FragmentUnreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let content = data.trim_end_matches(|c: char| c == '\n' || c == '\r');

        debug!(issue_number, kind = %kind, "found fragment");
        grouped
            .entry(kind)
            .or_default()
            .push(Fragment::new(issue_number, content));
        count += 1;
    }

    info!(
        fragment_count = count,
        type_count = grouped.len(),
        "fragments collected"
    );
    Ok(grouped)
}
