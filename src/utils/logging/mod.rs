//! Logging utilities
//!
//! Installs the global `tracing` subscriber used by the binary.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Default filter directive derived from the logging configuration
pub fn default_directive(config: &LoggingConfig) -> &'static str {
    if config.debug { "debug" } else { "info" }
}

/// Build the env filter, letting `RUST_LOG` override the configured level
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)))
}

/// Initialize the global subscriber
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init(config: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(false)
        .with_thread_ids(false);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.with_ansi(!config.no_color).try_init()
    };

    if let Err(e) = result {
        tracing::debug!("Logging already initialized: {}", e);
    }
}
