//! `PATCH /repository/{owner}/{repo}/collaborators/{username}`

#[cfg(test)]
mod tests {
    use crate::common::{TOKEN, fixtures, read_json, setup, setup_with_page_size};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use github_rest_plugin::server::HttpServer;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    const URI: &str = "/repository/octo/hello/collaborators/mona";

    #[actix_web::test]
    async fn test_collaborator_permission_is_updated() {
        let (upstream, state) = setup().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/hello/collaborators/mona"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&upstream)
            .await;
        Mock::given(method("PUT"))
            .and(path("/repos/octo/hello/collaborators/mona"))
            .and(header("authorization", TOKEN))
            .and(body_json(json!({"permission": "maintain"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&upstream)
            .await;

        let app = test::init_service(HttpServer::create_app(state)).await;
        let req = test::TestRequest::patch()
            .uri(URI)
            .insert_header(("Authorization", TOKEN))
            .set_json(json!({"permission": "maintain"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            read_json(resp).await["message"],
            "Permission updated successfully for collaborator mona with permission maintain"
        );
    }

    #[actix_web::test]
    async fn test_pending_invitation_is_updated() {
        let (upstream, state) = setup().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/hello/collaborators/mona"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&upstream)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/hello/invitations"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                fixtures::invitation(41, "octocat", "write"),
                fixtures::invitation(42, "Mona", "write"),
            ])))
            .expect(1)
            .mount(&upstream)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/repos/octo/hello/invitations/42"))
            .and(header("authorization", TOKEN))
            .and(body_json(json!({"permissions": "read"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::invitation(42, "Mona", "read")))
            .expect(1)
            .mount(&upstream)
            .await;

        let app = test::init_service(HttpServer::create_app(state)).await;
        let req = test::TestRequest::patch()
            .uri(URI)
            .insert_header(("Authorization", TOKEN))
            .set_json(json!({"permission": "pull"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::ACCEPTED);
        assert_eq!(
            read_json(resp).await["message"],
            "Invitation permission updated successfully for user mona with permission pull"
        );
    }

    #[actix_web::test]
    async fn test_invitation_on_second_page() {
        let (upstream, state) = setup_with_page_size(2).await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/hello/collaborators/mona"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&upstream)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/hello/invitations"))
            .and(query_param("per_page", "2"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::invitation_page(1, 2)))
            .expect(1)
            .mount(&upstream)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/hello/invitations"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                fixtures::invitation(3, "someone-3", "read"),
                fixtures::invitation(7, "mona", "read"),
            ])))
            .expect(1)
            .mount(&upstream)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/hello/invitations"))
            .and(query_param("page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&upstream)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/repos/octo/hello/invitations/7"))
            .and(body_json(json!({"permissions": "write"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&upstream)
            .await;

        let app = test::init_service(HttpServer::create_app(state)).await;
        let req = test::TestRequest::patch()
            .uri(URI)
            .set_json(json!({"permission": "push"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::ACCEPTED);
    }

    #[actix_web::test]
    async fn test_no_collaborator_and_no_invitation() {
        let (upstream, state) = setup().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/hello/collaborators/mona"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&upstream)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/hello/invitations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&upstream)
            .await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&upstream)
            .await;

        let app = test::init_service(HttpServer::create_app(state)).await;
        let req = test::TestRequest::patch()
            .uri(URI)
            .set_json(json!({"permission": "push"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            read_json(resp).await["message"],
            "User mona is not a collaborator and has no pending invitation"
        );
    }

    #[actix_web::test]
    async fn test_invitation_listing_denied_is_not_found() {
        let (upstream, state) = setup().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/hello/collaborators/mona"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&upstream)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/hello/invitations"))
            .respond_with(ResponseTemplate::new(403))
            .expect(1)
            .mount(&upstream)
            .await;

        let app = test::init_service(HttpServer::create_app(state)).await;
        let req = test::TestRequest::patch()
            .uri(URI)
            .set_json(json!({"permission": "push"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_status_check_failure_is_internal_error() {
        let (upstream, state) = setup().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/hello/collaborators/mona"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&upstream)
            .await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&upstream)
            .await;

        let app = test::init_service(HttpServer::create_app(state)).await;
        let req = test::TestRequest::patch()
            .uri(URI)
            .set_json(json!({"permission": "push"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(resp).await;
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .starts_with("Error checking collaborator status")
        );
    }

    #[actix_web::test]
    async fn test_missing_permission_is_bad_request() {
        let (upstream, state) = setup().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&upstream)
            .await;

        let app = test::init_service(HttpServer::create_app(state)).await;
        let req = test::TestRequest::patch()
            .uri(URI)
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
