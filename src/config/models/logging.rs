//! Logging configuration

use super::default_true;
use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Dump verbose output
    #[serde(default = "default_true")]
    pub debug: bool,
    /// Disable ANSI colors
    #[serde(default)]
    pub no_color: bool,
    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            debug: true,
            no_color: false,
            json: false,
        }
    }
}
