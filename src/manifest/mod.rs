//! Manifest file access
//!
//! This module provides functionality to:
//! - Read the pinned dependency version from composer.json
//! - Patch that version in place without reformatting the file

mod composer_json;
mod writer;

pub use composer_json::{
    lookup_path, parse_json, pinned_version, replace_pinned_version, ComposerJson,
};
pub use writer::{read_manifest, write_manifest};
