//! HTTP route modules
//!
//! Every route maps to exactly one orchestrator. Paths are matched by
//! segment count, so `/repository/{owner}/{repo}/collaborators/{username}`
//! never shadows the longer `.../permission` path.

pub mod collaborator;
pub mod health;
pub mod team_repo;

use crate::github::{Credential, UpstreamResponse};
use crate::normalize::message_body;
use actix_web::http::StatusCode;
use actix_web::http::header::{AUTHORIZATION, CONTENT_TYPE};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

/// Path parameters of the collaborator routes
#[derive(Debug, Clone, Deserialize)]
pub struct CollaboratorPath {
    pub owner: String,
    pub repo: String,
    pub username: String,
}

/// Path parameters of the team repository route
#[derive(Debug, Clone, Deserialize)]
pub struct TeamRepoPath {
    pub org: String,
    pub team_slug: String,
    pub owner: String,
    pub repo: String,
}

/// Register every proxy and probe route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/repository/{owner}/{repo}/collaborators/{username}/permission")
            .route(web::get().to(collaborator::get_permission)),
    )
    .service(
        web::resource("/repository/{owner}/{repo}/collaborators/{username}")
            .route(web::post().to(collaborator::add_collaborator))
            .route(web::patch().to(collaborator::update_permission))
            .route(web::delete().to(collaborator::remove_collaborator)),
    )
    .service(
        web::resource("/teamrepository/orgs/{org}/teams/{team_slug}/repos/{owner}/{repo}")
            .route(web::get().to(team_repo::get_team_repository)),
    )
    .configure(health::configure_routes);
}

/// Caller's `Authorization` header, forwarded as-is
pub fn credential(req: &HttpRequest) -> Credential {
    Credential::new(req.headers().get(AUTHORIZATION).map(|value| value.as_bytes()))
}

/// JSON response with an already serialized body
pub fn json_response(status: StatusCode, body: impl Into<web::Bytes>) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("application/json")
        .body(body.into())
}

/// `{"message": ...}` with the given status
pub fn message_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(message_body(message))
}

/// Relay an upstream response unchanged
///
/// An empty body is relayed as an empty body with only the status set.
pub fn forward_upstream(response: &UpstreamResponse) -> HttpResponse {
    let status =
        StatusCode::from_u16(response.status_code()).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut builder = HttpResponse::build(status);

    if response.body.is_empty() {
        return builder.finish();
    }

    let content_type = response
        .content_type
        .as_deref()
        .unwrap_or("application/json");
    builder
        .insert_header((CONTENT_TYPE, content_type))
        .body(response.body.clone())
}
