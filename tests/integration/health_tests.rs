//! Probe endpoints against a mocked upstream

#[cfg(test)]
mod tests {
    use crate::common::{read_text, setup};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use github_rest_plugin::server::HttpServer;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    async fn readyz_with_upstream_status(status: u16) -> (StatusCode, String) {
        let (upstream, state) = setup().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&upstream)
            .await;

        let app = test::init_service(HttpServer::create_app(state)).await;
        let req = test::TestRequest::get().uri("/readyz").to_request();
        let resp = test::call_service(&app, req).await;
        (resp.status(), read_text(resp).await)
    }

    #[actix_web::test]
    async fn test_ready_when_upstream_answers() {
        for status in [200, 401, 404] {
            let (code, body) = readyz_with_upstream_status(status).await;
            assert_eq!(code, StatusCode::OK, "{}", status);
            assert_eq!(body, "Ready");
        }
    }

    #[actix_web::test]
    async fn test_not_ready_on_upstream_server_error() {
        let (code, body) = readyz_with_upstream_status(503).await;
        assert_eq!(code, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, "GitHub API Error");
    }

    #[actix_web::test]
    async fn test_healthz_does_not_call_upstream() {
        let (upstream, state) = setup().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&upstream)
            .await;

        let app = test::init_service(HttpServer::create_app(state)).await;
        let req = test::TestRequest::get().uri("/healthz").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_text(resp).await, "OK");
    }
}
