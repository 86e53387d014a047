//! CHANGELOG.md release entries
//!
//! A bump adds a block like this to the top of the changelog:
//!
//! ```text
//! ### 1.3.8: 2015-05-07
//!
//! * Update to WordPress 4.2.2
//!
//! ### 1.3.7: 2015-04-27
//! ```
//!
//! The release number is the first `### X.Y.Z` header with its patch
//! component incremented. A leading `### HEAD` placeholder block is
//! replaced by the new release.

use crate::domain::Version;
use crate::error::ChangelogError;
use chrono::NaiveDate;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Heading that marks pending, unversioned changes
pub const UNRELEASED_MARKER: &str = "### HEAD";

/// Prefix of a changelog entry line
const ENTRY_PREFIX: &str = "* ";

/// `### 1.2.3` optionally followed by `:` and a date or other text
static VERSION_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^###\s+(\d+\.\d+\.\d+):?(?:\s|$)").unwrap());

/// Result of rendering a bump without touching the filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogBump {
    /// Full changelog content after the bump
    pub content: String,
    /// Release found in the newest header
    pub current: Version,
    /// Release added by the bump
    pub next: Version,
}

/// Find the newest release header and return its version
pub fn current_version<S: AsRef<str>>(lines: &[S]) -> Result<Version, ChangelogError> {
    let raw = lines
        .iter()
        .find_map(|line| {
            VERSION_HEADER_RE
                .captures(line.as_ref())
                .map(|caps| caps[1].to_string())
        })
        .ok_or(ChangelogError::NoVersionHeaderFound)?;

    Ok(Version::parse(&raw)?)
}

/// Prepare the head of the changelog so that index 0 is where the new entry goes
///
/// A `### HEAD` placeholder block (the marker and the line after it) is
/// dropped. Without a marker a blank line is prepended to separate the new
/// entry from the previous release.
pub fn normalize_head(lines: &mut Vec<String>) {
    if lines
        .first()
        .is_some_and(|line| line.contains(UNRELEASED_MARKER))
    {
        let placeholder = lines.len().min(2);
        lines.drain(..placeholder);
    } else {
        lines.insert(0, String::new());
    }
}

/// Insert the WordPress update entry at `index`
pub fn add_version_note(mut lines: Vec<String>, index: usize, wordpress: &Version) -> Vec<String> {
    lines.insert(index, format!("{}Update to WordPress {}", ENTRY_PREFIX, wordpress));
    lines
}

/// Put the release header and its trailing blank line on top
pub fn add_title(lines: Vec<String>, release: &Version, date: NaiveDate) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(format!("### {}: {}", release, date.format("%Y-%m-%d")));
    out.push(String::new());
    out.extend(lines);
    out
}

/// Render the changelog content after bumping to `wordpress`
pub fn render_bump(
    content: &str,
    wordpress: &Version,
    today: NaiveDate,
) -> Result<ChangelogBump, ChangelogError> {
    let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();

    let current = current_version(&lines)?;
    let next = current.next_patch()?;

    normalize_head(&mut lines);
    let lines = add_version_note(lines, 0, wordpress);
    let lines = add_title(lines, &next, today);

    Ok(ChangelogBump {
        content: lines.join("\n"),
        current,
        next,
    })
}

/// A changelog file on disk
#[derive(Debug, Clone)]
pub struct ChangelogUpdater {
    path: PathBuf,
}

impl ChangelogUpdater {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the changelog and render the bump in memory
    pub fn prepare(
        &self,
        wordpress: &Version,
        today: NaiveDate,
    ) -> Result<ChangelogBump, ChangelogError> {
        let content = fs::read_to_string(&self.path).map_err(|source| ChangelogError::ReadError {
            path: self.path.clone(),
            source,
        })?;
        render_bump(&content, wordpress, today)
    }

    /// Overwrite the changelog with rendered content
    pub fn write(&self, bump: &ChangelogBump) -> Result<(), ChangelogError> {
        fs::write(&self.path, &bump.content).map_err(|source| ChangelogError::WriteError {
            path: self.path.clone(),
            source,
        })
    }

    /// Read, bump, and write back; returns the new release version
    pub fn update(&self, wordpress: &Version, today: NaiveDate) -> Result<Version, ChangelogError> {
        let bump = self.prepare(wordpress, today)?;
        self.write(&bump)?;
        Ok(bump.next)
    }
}
