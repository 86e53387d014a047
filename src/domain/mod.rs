//! Core domain models for bump-bedrock
//!
//! This module contains the fundamental types used throughout the application:
//! - Version triplets and the newer-than comparison
//! - Upstream release tags
//! - Bump outcomes

mod bump_result;
mod tag;
mod version;

pub use bump_result::{BumpResult, BumpedVersions};
pub use tag::{Commit, Tag};
pub use version::{is_newer, Version};
