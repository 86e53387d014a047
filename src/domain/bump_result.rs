//! Outcome of a bump run

use super::Version;
use serde::Serialize;
use std::fmt;

/// Versions involved in a successful bump
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BumpedVersions {
    /// WordPress version pinned before the bump
    pub previous: Version,
    /// WordPress version now pinned
    pub wordpress: Version,
    /// Project release version that was added to the changelog
    pub release: Version,
}

/// Result of comparing the pinned version against the latest tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BumpResult {
    /// Manifest and changelog were (or, in dry-run, would be) rewritten
    Updated(BumpedVersions),
    /// The pinned version is already at or past the latest tag
    AlreadyCurrent { pinned: Version, latest: Version },
}

impl BumpResult {
    /// Returns true if the bump changed (or would change) the project
    pub fn is_updated(&self) -> bool {
        matches!(self, BumpResult::Updated(_))
    }

    /// One-line status message
    pub fn message(&self) -> &'static str {
        match self {
            BumpResult::Updated(_) => "updated successfully",
            BumpResult::AlreadyCurrent { .. } => "nothing to update",
        }
    }
}

impl fmt::Display for BumpResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
