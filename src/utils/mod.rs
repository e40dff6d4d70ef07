//! Utility modules for the plugin
//!
//! - **error**: Error type and its HTTP mapping
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{ProxyError, Result};
