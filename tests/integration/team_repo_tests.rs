//! `GET /teamrepository/orgs/{org}/teams/{team_slug}/repos/{owner}/{repo}`

#[cfg(test)]
mod tests {
    use crate::common::{TOKEN, fixtures, read_json, setup};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use github_rest_plugin::github::REPOSITORY_MEDIA_TYPE;
    use github_rest_plugin::server::HttpServer;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    const URI: &str = "/teamrepository/orgs/octo-org/teams/core/repos/octo/hello";
    const UPSTREAM_PATH: &str = "/orgs/octo-org/teams/core/repos/octo/hello";

    #[actix_web::test]
    async fn test_team_repository_is_rewritten() {
        let (upstream, state) = setup().await;
        Mock::given(method("GET"))
            .and(path(UPSTREAM_PATH))
            .and(header("accept", REPOSITORY_MEDIA_TYPE))
            .and(header("authorization", TOKEN))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(fixtures::team_repository("octo", "hello", Some("write"))),
            )
            .expect(1)
            .mount(&upstream)
            .await;

        let app = test::init_service(HttpServer::create_app(state)).await;
        let req = test::TestRequest::get()
            .uri(URI)
            .insert_header(("Authorization", TOKEN))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_json(resp).await;
        assert_eq!(body["permission"], "push");
        assert_eq!(body["owner"], "octo");
        assert_eq!(body["full_name"], "octo/hello");
        assert!(body.get("permissions").is_none());
    }

    #[actix_web::test]
    async fn test_flags_decide_without_role_name() {
        let (upstream, state) = setup().await;
        Mock::given(method("GET"))
            .and(path(UPSTREAM_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(fixtures::team_repository("octo", "hello", None)),
            )
            .mount(&upstream)
            .await;

        let app = test::init_service(HttpServer::create_app(state)).await;
        let req = test::TestRequest::get().uri(URI).to_request();
        let body = read_json(test::call_service(&app, req).await).await;

        assert_eq!(body["permission"], "maintain");
        assert_eq!(body["owner"], "octo");
    }

    #[actix_web::test]
    async fn test_team_without_access_is_forwarded() {
        let (upstream, state) = setup().await;
        let not_found = json!({"message": "Not Found", "documentation_url": "https://docs.github.com/rest"});
        Mock::given(method("GET"))
            .and(path(UPSTREAM_PATH))
            .respond_with(ResponseTemplate::new(404).set_body_json(not_found.clone()))
            .expect(1)
            .mount(&upstream)
            .await;

        let app = test::init_service(HttpServer::create_app(state)).await;
        let req = test::TestRequest::get().uri(URI).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(read_json(resp).await, not_found);
    }
}
