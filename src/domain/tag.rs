//! Release tag descriptors as returned by the GitHub tags API

use serde::{Deserialize, Serialize};

/// Commit a tag points at
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub url: String,
}

/// A named release point in the upstream repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name, e.g. `4.2.1`
    pub name: String,
    #[serde(default)]
    pub zipball_url: String,
    #[serde(default)]
    pub tarball_url: String,
    #[serde(default)]
    pub commit: Commit,
}

impl Tag {
    /// Creates a tag with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            zipball_url: String::new(),
            tarball_url: String::new(),
            commit: Commit::default(),
        }
    }
}
