//! wneud Changelog - News fragment changelog generation
//!
//! This crate scans a directory of `{issue}.{type}.rst` news fragments,
//! groups them by change type and renders a changelog section.

pub mod formatter;
pub mod generator;
pub mod scanner;
pub mod types;

pub use formatter::{ChangelogFormatter, FormatterRegistry, MarkdownFormatter, RstFormatter};
pub use generator::{build_changelog, render, ChangelogGenerator};
pub use scanner::{find_fragments, parse_fragment_name};
pub use types::{ChangeLog, Fragment, GroupedFragments, Section};
