//! Tag sources for discovering the latest upstream release
//!
//! This module provides:
//! - HTTP client shared foundation
//! - The `TagSource` seam the orchestrator depends on
//! - GitHub tags API adapter

mod client;
mod github;

pub use client::{HttpClient, DEFAULT_USER_AGENT};
pub use github::GitHubTags;

use crate::domain::Tag;
use crate::error::RegistryError;
use async_trait::async_trait;

/// Trait for anything that can list upstream release tags
#[async_trait]
pub trait TagSource: Send + Sync {
    /// Endpoint description used in error messages
    fn endpoint(&self) -> &str;

    /// Fetch all tags, in the order the upstream returns them
    async fn fetch_tags(&self) -> Result<Vec<Tag>, RegistryError>;

    /// Fetch the latest tag
    ///
    /// The first element of the listing is taken as latest; ordering is owned
    /// by the upstream API and is not verified here.
    async fn fetch_latest_tag(&self) -> Result<Tag, RegistryError> {
        let tags = self.fetch_tags().await?;
        tags.into_iter().next().ok_or_else(|| RegistryError::NoTags {
            endpoint: self.endpoint().to_string(),
        })
    }
}
