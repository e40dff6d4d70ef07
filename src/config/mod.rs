//! Configuration management for the plugin
//!
//! This module handles loading, overriding and validating the plugin configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{ProxyError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the plugin
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream GitHub API settings
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values supplied on the command line or through the environment
///
/// `None` leaves the file/default value untouched.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub port: Option<u16>,
    pub debug: Option<bool>,
    pub no_color: Option<bool>,
    pub base_url: Option<String>,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ProxyError::config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| ProxyError::config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command line / environment overrides, then re-validate
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self> {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(debug) = overrides.debug {
            self.logging.debug = debug;
        }
        if let Some(no_color) = overrides.no_color {
            self.logging.no_color = no_color;
        }
        if let Some(base_url) = overrides.base_url {
            self.upstream.base_url = base_url;
        }

        self.validate()?;
        Ok(self)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Get upstream configuration
    pub fn upstream(&self) -> &UpstreamConfig {
        &self.upstream
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| ProxyError::config(format!("Server config error: {}", e)))?;

        self.upstream
            .validate()
            .map_err(|e| ProxyError::config(format!("Upstream config error: {}", e)))?;

        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ProxyError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
