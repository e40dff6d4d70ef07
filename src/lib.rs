//! # github-rest-plugin
//!
//! Normalizing HTTP proxy between a reconciliation controller and the
//! GitHub REST API.
//!
//! The controller always speaks the `pull`/`push`/`admin`/`maintain`/`triage`
//! permission vocabulary and never has to know about invitations:
//!
//! - permission lookups are flattened and translated from upstream's
//!   `read`/`write` role names
//! - updates and removals for users who have not accepted their invitation
//!   yet are applied to the pending invitation instead
//! - upstream creation statuses are restated as `202 Accepted` with a
//!   human readable message
//!
//! The caller's `Authorization` header is forwarded untouched; the proxy holds
//! no credentials and no state.
//!
//! ```rust,no_run
//! use github_rest_plugin::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/github-plugin.yaml").await?;
//!     server::run_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod github;
pub mod normalize;
pub mod server;
pub mod utils;

pub use config::{Config, ConfigOverrides};
pub use utils::error::{ProxyError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
