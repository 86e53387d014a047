//! composer.json access for Bedrock projects
//!
//! Reads go through serde_json and navigate `require.<package>`. Writes are a
//! regex replacement of the `"<package>": "<version>"` pair inside `require`
//! so that key order, indentation, and line endings stay exactly as they were.

use crate::domain::Version;
use crate::error::ManifestError;
use crate::manifest::{read_manifest, write_manifest};
use regex::Regex;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Top-level section that holds runtime dependencies
const REQUIRE_SECTION: &str = "require";

/// A composer.json file on disk
#[derive(Debug, Clone)]
pub struct ComposerJson {
    path: PathBuf,
}

impl ComposerJson {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw file content
    pub fn read(&self) -> Result<String, ManifestError> {
        read_manifest(&self.path)
    }

    /// Overwrite the file with `content`
    pub fn write(&self, content: &str) -> Result<(), ManifestError> {
        write_manifest(&self.path, content)
    }

    /// Read the version pinned for `dependency` under `require`
    pub fn read_pinned_version(&self, dependency: &str) -> Result<Version, ManifestError> {
        let content = self.read()?;
        pinned_version(&content, &self.path, dependency)
    }

    /// Rewrite the version pinned for `dependency` in place
    pub fn set_pinned_version(
        &self,
        dependency: &str,
        version: &Version,
    ) -> Result<(), ManifestError> {
        let content = self.read()?;
        let updated = replace_pinned_version(&content, &self.path, dependency, version)?;
        self.write(&updated)
    }
}

/// Extract the pinned version of `dependency` from manifest content
///
/// `path` is only used for error context.
pub fn pinned_version(
    content: &str,
    path: &Path,
    dependency: &str,
) -> Result<Version, ManifestError> {
    let json = parse_json(content, path)?;
    let raw = lookup_segments(&json, &[REQUIRE_SECTION, dependency], path)?;

    Version::parse(raw).map_err(|source| ManifestError::InvalidVersion {
        path: path.to_path_buf(),
        source,
    })
}

/// Look up a string value by dot-delimited path, e.g. `name` or `extra.installer-paths`
///
/// Keys that themselves contain dots cannot be addressed this way; use
/// [`pinned_version`] for dependency names.
pub fn lookup_path<'a>(
    json: &'a Value,
    key_path: &str,
    path: &Path,
) -> Result<&'a str, ManifestError> {
    let segments: Vec<&str> = key_path.split('.').collect();
    lookup_segments(json, &segments, path)
}

fn lookup_segments<'a>(
    json: &'a Value,
    segments: &[&str],
    path: &Path,
) -> Result<&'a str, ManifestError> {
    let key_path = segments.join(".");

    let mut current = json;
    for segment in segments {
        current = current
            .as_object()
            .and_then(|object| object.get(*segment))
            .ok_or_else(|| ManifestError::path_not_found(path, &key_path))?;
    }

    current.as_str().ok_or_else(|| ManifestError::TypeMismatch {
        path: path.to_path_buf(),
        key_path,
        found: json_type_name(current).to_string(),
    })
}

/// Replace the pinned version of `dependency` in manifest content
///
/// Only the quoted value under `require` changes; every other byte is
/// preserved. The same package may also be named in sections such as
/// `conflict` or `require-dev`, so each textual candidate is checked by
/// re-parsing until the one that sets `require.<dependency>` is found.
pub fn replace_pinned_version(
    content: &str,
    path: &Path,
    dependency: &str,
    version: &Version,
) -> Result<String, ManifestError> {
    let mut expected = parse_json(content, path)?;
    let slot = expected
        .get_mut(REQUIRE_SECTION)
        .and_then(|require| require.get_mut(dependency))
        .ok_or_else(|| ManifestError::key_not_found(path, dependency))?;
    *slot = Value::String(version.to_string());

    // "package": "value" with flexible whitespace; the value may contain escapes
    let pattern = format!(
        r#"("{}"\s*:\s*)"(?:[^"\\]|\\.)*""#,
        regex::escape(dependency)
    );
    let re = Regex::new(&pattern)
        .map_err(|e| ManifestError::json_parse_error(path, format!("invalid key pattern: {}", e)))?;

    for caps in re.captures_iter(content) {
        let (Some(pair), Some(key)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let candidate = format!(
            r#"{}{}"{}"{}"#,
            &content[..pair.start()],
            key.as_str(),
            version,
            &content[pair.end()..]
        );
        if parse_json(&candidate, path).is_ok_and(|json| json == expected) {
            return Ok(candidate);
        }
    }

    Err(ManifestError::key_not_found(path, dependency))
}

/// Parse manifest content as JSON
pub fn parse_json(content: &str, path: &Path) -> Result<Value, ManifestError> {
    serde_json::from_str(content).map_err(|e| ManifestError::json_parse_error(path, e.to_string()))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
