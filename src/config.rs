//! Explicit configuration threaded through a bump run
//!
//! Paths, the dependency key, and the fetch settings are plain values built
//! once from the CLI and passed to the components that need them.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default manifest file name inside the project directory
pub const DEFAULT_MANIFEST_FILE: &str = "composer.json";

/// Default changelog file name inside the project directory
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Default composer package that carries the WordPress version
pub const DEFAULT_DEPENDENCY: &str = "johnpbloch/wordpress";

/// Default tag-listing endpoint
pub const DEFAULT_TAGS_ENDPOINT: &str = "https://api.github.com/repos/johnpbloch/wordpress/tags";

/// Default timeout for the tag request (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Locations of the files a bump touches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Project root directory
    pub root: PathBuf,
    /// Path to composer.json
    pub manifest: PathBuf,
    /// Path to CHANGELOG.md
    pub changelog: PathBuf,
}

impl ProjectPaths {
    /// Paths using the default file names
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_files(root, DEFAULT_MANIFEST_FILE, DEFAULT_CHANGELOG_FILE)
    }

    /// Paths using custom file names relative to `root`
    pub fn with_files(
        root: impl Into<PathBuf>,
        manifest: impl AsRef<Path>,
        changelog: impl AsRef<Path>,
    ) -> Self {
        let root = root.into();
        Self {
            manifest: root.join(manifest),
            changelog: root.join(changelog),
            root,
        }
    }

    /// Check that the project root is an existing directory
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.root.exists() {
            return Err(ConfigError::InvalidPath {
                path: self.root.clone(),
                message: "directory does not exist".to_string(),
            });
        }
        if !self.root.is_dir() {
            return Err(ConfigError::InvalidPath {
                path: self.root.clone(),
                message: "not a directory".to_string(),
            });
        }
        Ok(())
    }
}

/// Settings for a bump run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpConfig {
    pub paths: ProjectPaths,
    /// Composer package name under `require`
    pub dependency: String,
    /// Compute everything but write nothing
    pub dry_run: bool,
}

impl BumpConfig {
    pub fn new(paths: ProjectPaths) -> Self {
        Self {
            paths,
            dependency: DEFAULT_DEPENDENCY.to_string(),
            dry_run: false,
        }
    }

    pub fn with_dependency(mut self, dependency: impl Into<String>) -> Self {
        self.dependency = dependency.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Settings for the tag request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Tag-listing endpoint URL
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
    /// Optional API token sent as a bearer token
    pub token: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_TAGS_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            token: None,
        }
    }
}

/// Parse a timeout given in whole seconds
pub fn parse_timeout(s: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidTimeout {
        value: s.to_string(),
    };
    let secs: u64 = s.trim().parse().map_err(|_| invalid())?;
    if secs == 0 {
        return Err(invalid());
    }
    Ok(Duration::from_secs(secs))
}
