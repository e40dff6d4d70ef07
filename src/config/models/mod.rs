//! Configuration data models
//!
//! This module defines all configuration structures used by the plugin.

pub mod logging;
pub mod server;
pub mod upstream;

pub use logging::*;
pub use server::*;
pub use upstream::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default inbound read timeout in seconds
pub fn default_client_request_timeout() -> u64 {
    10
}

/// Default idle keep-alive in seconds
pub fn default_keep_alive() -> u64 {
    30
}

/// Default graceful shutdown window in seconds
pub fn default_shutdown_timeout() -> u64 {
    30
}

/// Default upstream API base URL
pub fn default_base_url() -> String {
    "https://api.github.com".to_string()
}

/// Default user agent sent upstream
pub fn default_user_agent() -> String {
    format!("github-rest-plugin/{}", env!("CARGO_PKG_VERSION"))
}

/// Page size used when scanning repository invitations
pub fn default_invitations_page_size() -> u32 {
    30
}

/// Default readiness probe timeout in seconds
pub fn default_readiness_timeout() -> u64 {
    5
}

pub fn default_true() -> bool {
    true
}
