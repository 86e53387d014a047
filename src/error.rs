//! Application error types using thiserror
//!
//! Error hierarchy:
//! - VersionError: Malformed version strings
//! - RegistryError: Issues with the tag-listing endpoint
//! - ManifestError: Issues reading or patching composer.json
//! - ChangelogError: Issues reading or rewriting CHANGELOG.md
//! - ConfigError: Issues with CLI configuration

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Version parsing errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Tag endpoint related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Changelog related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to version strings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// Version is not a plain numeric major.minor.patch triplet
    #[error("malformed version '{version}': {message}")]
    Malformed { version: String, message: String },
}

/// Errors related to fetching tags from the upstream endpoint
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Transport failure or unexpected HTTP status
    #[error("failed to fetch tags from {endpoint}: {message}")]
    NetworkError { endpoint: String, message: String },

    /// Timeout
    #[error("timeout while fetching tags from {endpoint}")]
    Timeout { endpoint: String },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {endpoint} (set GITHUB_TOKEN to raise the limit)")]
    RateLimitExceeded { endpoint: String },

    /// Authentication error
    #[error("authentication failed for {endpoint}: {message}")]
    AuthenticationError { endpoint: String, message: String },

    /// Response body could not be decoded as a tag list
    #[error("invalid response from {endpoint}: {message}")]
    InvalidResponse { endpoint: String, message: String },

    /// Response decoded to an empty tag list
    #[error("no tags returned by {endpoint}")]
    NoTags { endpoint: String },
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write manifest file
    #[error("failed to write manifest file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// A segment of the lookup path is missing or its parent is not an object
    #[error("path '{key_path}' not found in {path}")]
    PathNotFound { path: PathBuf, key_path: String },

    /// The value at the lookup path is not a string
    #[error("expected a string at '{key_path}' in {path}, found {found}")]
    TypeMismatch {
        path: PathBuf,
        key_path: String,
        found: String,
    },

    /// No line holds the dependency key with a string value
    #[error("dependency '{key}' not found in {path}")]
    KeyNotFound { path: PathBuf, key: String },

    /// The pinned value is not a version
    #[error("invalid pinned version in {path}: {source}")]
    InvalidVersion {
        path: PathBuf,
        #[source]
        source: VersionError,
    },
}

/// Errors related to changelog operations
#[derive(Error, Debug)]
pub enum ChangelogError {
    /// Failed to read changelog file
    #[error("failed to read changelog {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write changelog file
    #[error("failed to write changelog {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No `### X.Y.Z` header anywhere in the changelog
    #[error("no version header found in changelog (expected a line like '### 1.2.3: 2015-01-01')")]
    NoVersionHeaderFound,

    /// The header version could not be bumped
    #[error(transparent)]
    Version(#[from] VersionError),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid project path
    #[error("invalid path '{path}': {message}")]
    InvalidPath { path: PathBuf, message: String },

    /// Invalid timeout value
    #[error("invalid timeout '{value}': expected a positive number of seconds")]
    InvalidTimeout { value: String },
}

impl VersionError {
    /// Creates a new Malformed error
    pub fn malformed(version: impl Into<String>, message: impl Into<String>) -> Self {
        VersionError::Malformed {
            version: version.into(),
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new NetworkError
    pub fn network_error(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::NetworkError {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(endpoint: impl Into<String>) -> Self {
        RegistryError::Timeout {
            endpoint: endpoint.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::InvalidResponse {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new PathNotFound error
    pub fn path_not_found(path: impl Into<PathBuf>, key_path: impl Into<String>) -> Self {
        ManifestError::PathNotFound {
            path: path.into(),
            key_path: key_path.into(),
        }
    }

    /// Creates a new KeyNotFound error
    pub fn key_not_found(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        ManifestError::KeyNotFound {
            path: path.into(),
            key: key.into(),
        }
    }
}
