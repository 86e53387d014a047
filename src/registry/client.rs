//! HTTP client shared foundation
//!
//! This module provides a thin HTTP client with:
//! - Configurable timeout and User-Agent
//! - GitHub API headers and optional bearer token
//! - Status code to error mapping (no retries: one request per run)

use crate::config::DEFAULT_TIMEOUT;
use crate::error::RegistryError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Default User-Agent header (the GitHub API rejects requests without one)
pub const DEFAULT_USER_AGENT: &str = concat!("bump-bedrock/", env!("CARGO_PKG_VERSION"));

/// Media type recommended by the GitHub REST API
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Header GitHub uses to report the remaining request budget
const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, None)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(
        timeout: Duration,
        user_agent: &str,
        token: Option<&str>,
    ) -> Result<Self, RegistryError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                RegistryError::AuthenticationError {
                    endpoint: "HTTP client".to_string(),
                    message: format!("invalid token: {}", e),
                }
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                RegistryError::network_error(
                    "HTTP client",
                    format!("failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self { client })
    }

    /// Perform a GET request, mapping failure statuses to errors
    pub async fn get(&self, url: &str) -> Result<reqwest::Response, RegistryError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(RegistryError::AuthenticationError {
                endpoint: url.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        if status == StatusCode::TOO_MANY_REQUESTS
            || (status == StatusCode::FORBIDDEN && is_rate_limited(&response))
        {
            return Err(RegistryError::RateLimitExceeded {
                endpoint: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(RegistryError::network_error(url, format!("HTTP {}", status)));
        }

        Ok(response)
    }

    /// Perform a GET request and decode the JSON body
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, RegistryError> {
        let body = self
            .get(url)
            .await?
            .text()
            .await
            .map_err(|e| transport_error(url, e))?;

        serde_json::from_str(&body).map_err(|e| {
            RegistryError::invalid_response(url, format!("failed to parse JSON: {}", e))
        })
    }
}

fn is_rate_limited(response: &reqwest::Response) -> bool {
    response
        .headers()
        .get(RATE_LIMIT_REMAINING)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim() == "0")
        .unwrap_or(false)
}

fn transport_error(url: &str, e: reqwest::Error) -> RegistryError {
    if e.is_timeout() {
        RegistryError::timeout(url)
    } else {
        RegistryError::network_error(url, e.to_string())
    }
}
