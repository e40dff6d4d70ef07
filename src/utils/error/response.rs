//! HTTP response handling for errors

use super::types::ProxyError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        self.http_status()
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.http_status();
        let message = self.to_string();

        if status_code.is_server_error() {
            error!(code = self.error_code(), "{}", message);
        } else {
            warn!(code = self.error_code(), "{}", message);
        }

        let error_response = ErrorResponse {
            message: message.clone(),
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
///
/// `message` is duplicated at the root because the calling controller only
/// reads root-level fields.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}
