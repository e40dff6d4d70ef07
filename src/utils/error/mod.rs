//! Error handling for the plugin
//!
//! This module defines the error type shared by the upstream client, the
//! normalization layer and the HTTP handlers.

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{ProxyError, Result};
