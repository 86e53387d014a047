//! Release version type and comparison
//!
//! WordPress tags, the pinned composer.json value, and the changelog headers
//! all use a plain `major.minor.patch` triplet. Anything else (constraints
//! such as `^4.2`, two-part tags, pre-release suffixes) is rejected instead of
//! being guessed at.

use crate::error::VersionError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A numeric `major.minor.patch` version
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(semver::Version);

impl Version {
    /// Creates a version from its three components
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(semver::Version::new(major, minor, patch))
    }

    /// Parses a `major.minor.patch` string
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let parsed = semver::Version::parse(input)
            .map_err(|e| VersionError::malformed(input, e.to_string()))?;

        if !parsed.pre.is_empty() {
            return Err(VersionError::malformed(
                input,
                format!("pre-release suffix '-{}' is not supported", parsed.pre),
            ));
        }
        if !parsed.build.is_empty() {
            return Err(VersionError::malformed(
                input,
                format!("build metadata '+{}' is not supported", parsed.build),
            ));
        }

        Ok(Self(parsed))
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    /// Returns the next patch release, leaving major and minor untouched
    pub fn next_patch(&self) -> Result<Self, VersionError> {
        let patch = self.patch().checked_add(1).ok_or_else(|| {
            VersionError::malformed(self.to_string(), "patch component cannot be incremented")
        })?;
        Ok(Self::new(self.major(), self.minor(), patch))
    }

    /// Returns true if `candidate` is strictly greater than `self`
    pub fn is_older_than(&self, candidate: &Version) -> bool {
        self < candidate
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Decide whether `candidate` is an update over `current`
///
/// Ties are not an update. Either string failing to parse is an error.
pub fn is_newer(current: &str, candidate: &str) -> Result<bool, VersionError> {
    let current = Version::parse(current)?;
    let candidate = Version::parse(candidate)?;
    Ok(current.is_older_than(&candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triplet() {
        let v = Version::parse("4.2.1").unwrap();
        assert_eq!(v.major(), 4);
        assert_eq!(v.minor(), 2);
        assert_eq!(v.patch(), 1);
        assert_eq!(v.to_string(), "4.2.1");
    }

    #[test]
    fn test_parse_rejects_two_components() {
        let err = Version::parse("4.2").unwrap_err();
        assert!(matches!(err, VersionError::Malformed { ref version, .. } if version == "4.2"));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(Version::parse("4.x.1").is_err());
        assert!(Version::parse("^4.2.1").is_err());
        assert!(Version::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_prerelease_and_build() {
        let err = Version::parse("4.3.0-beta1").unwrap_err();
        assert!(err.to_string().contains("pre-release"));

        let err = Version::parse("4.3.0+build.5").unwrap_err();
        assert!(err.to_string().contains("build metadata"));
    }

    #[test]
    fn test_from_str() {
        let v: Version = "1.3.7".parse().unwrap();
        assert_eq!(v, Version::new(1, 3, 7));
    }

    #[test]
    fn test_next_patch_overflow() {
        let err = Version::new(1, 2, u64::MAX).next_patch().unwrap_err();
        assert!(matches!(err, VersionError::Malformed { .. }));
    }

    #[test]
    fn test_next_patch() {
        assert_eq!(Version::new(1, 3, 7).next_patch().unwrap(), Version::new(1, 3, 8));
        assert_eq!(Version::new(1, 9, 9).next_patch().unwrap(), Version::new(1, 9, 10));
    }

    #[test]
    fn test_is_newer_examples() {
        assert!(!is_newer("4.2.1", "4.2.0").unwrap());
        assert!(is_newer("4.2.0", "4.2.1").unwrap());
        assert!(is_newer("4.2.1", "100.2.1").unwrap());
    }

    #[test]
    fn test_is_newer_tie_is_not_newer() {
        assert!(!is_newer("4.2.1", "4.2.1").unwrap());
    }

    #[test]
    fn test_is_newer_is_numeric_not_lexicographic() {
        assert!(is_newer("4.9.0", "4.10.0").unwrap());
        assert!(!is_newer("10.0.0", "9.9.9").unwrap());
    }

    #[test]
    fn test_is_newer_is_deterministic() {
        let first = is_newer("3.9.2", "4.0.0").unwrap();
        let second = is_newer("3.9.2", "4.0.0").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_is_newer_surfaces_malformed_input() {
        assert!(is_newer("4.2", "4.2.1").is_err());
        assert!(is_newer("4.2.1", "latest").is_err());
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&Version::new(4, 0, 4)).unwrap();
        assert_eq!(json, "\"4.0.4\"");
    }
}
