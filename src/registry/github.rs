//! GitHub tags API adapter
//!
//! Lists the tags of a repository.
//! API endpoint: https://api.github.com/repos/{owner}/{repo}/tags

use crate::config::FetchConfig;
use crate::domain::Tag;
use crate::error::RegistryError;
use crate::registry::{HttpClient, TagSource, DEFAULT_USER_AGENT};
use async_trait::async_trait;

/// GitHub tags adapter
pub struct GitHubTags {
    client: HttpClient,
    endpoint: String,
}

impl GitHubTags {
    /// Create an adapter for an explicit tag-listing URL
    pub fn new(client: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Create an adapter from fetch settings
    pub fn from_config(config: &FetchConfig) -> Result<Self, RegistryError> {
        let client =
            HttpClient::with_config(config.timeout, DEFAULT_USER_AGENT, config.token.as_deref())?;
        Ok(Self::new(client, config.endpoint.clone()))
    }
}

#[async_trait]
impl TagSource for GitHubTags {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_tags(&self) -> Result<Vec<Tag>, RegistryError> {
        self.client.get_json(&self.endpoint).await
    }
}
