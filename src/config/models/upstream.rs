//! Upstream API configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Largest page size the upstream accepts for list endpoints
pub const MAX_PAGE_SIZE: u32 = 100;

/// Upstream GitHub API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL every upstream path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Page size for the invitations scan
    #[serde(default = "default_invitations_page_size")]
    pub invitations_page_size: u32,
    /// Outbound request timeout in seconds (unset: no client timeout)
    #[serde(default)]
    pub timeout: Option<u64>,
    /// Timeout for the readiness probe's reachability check, in seconds
    #[serde(default = "default_readiness_timeout")]
    pub readiness_timeout: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            invitations_page_size: default_invitations_page_size(),
            timeout: None,
            readiness_timeout: default_readiness_timeout(),
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    pub fn readiness_timeout(&self) -> Duration {
        Duration::from_secs(self.readiness_timeout)
    }

    /// Validate upstream configuration
    pub fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid upstream base URL '{}': {}", self.base_url, e))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!(
                "Upstream base URL must be http or https, got '{}'",
                url.scheme()
            ));
        }

        if self.invitations_page_size == 0 || self.invitations_page_size > MAX_PAGE_SIZE {
            return Err(format!(
                "Invitations page size must be between 1 and {}",
                MAX_PAGE_SIZE
            ));
        }

        if self.timeout == Some(0) {
            return Err("Upstream timeout cannot be 0".to_string());
        }

        if self.readiness_timeout == 0 {
            return Err("Readiness timeout cannot be 0".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("User agent cannot be empty".to_string());
        }

        Ok(())
    }
}
