//! Error responses seen by the controller

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;
    use github_rest_plugin::ProxyError;
    use github_rest_plugin::utils::error::ErrorResponse;

    fn body(error: &ProxyError) -> ErrorResponse {
        let bytes = error.error_response().into_body().try_into_bytes().unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_bad_request_flow() {
        let error = ProxyError::bad_request("Error reading permission from request body");
        assert_eq!(error.error_response().status().as_u16(), 400);

        let body = body(&error);
        assert_eq!(body.error.code, "BAD_REQUEST");
        assert!(body.message.contains("Error reading permission"));
        assert_eq!(body.message, body.error.message);
    }

    #[test]
    fn test_upstream_flow_keeps_message() {
        let error = ProxyError::upstream("Error removing user: connection reset");
        assert_eq!(error.error_response().status().as_u16(), 500);
        assert_eq!(body(&error).message, "Error removing user: connection reset");
    }

    #[test]
    fn test_normalization_errors_are_internal() {
        let error: ProxyError = github_rest_plugin::normalize::parse_object(b"[]")
            .unwrap_err()
            .into();
        assert_eq!(error.error_response().status().as_u16(), 500);
        assert_eq!(body(&error).error.code, "NORMALIZATION_ERROR");
    }
}
