//! `GET /teamrepository/orgs/{org}/teams/{team_slug}/repos/{owner}/{repo}`
//!
//! Reports the team's permission on a repository in the controller
//! vocabulary, with `owner` reduced to the login string.

use super::{TeamRepoPath, credential, forward_upstream, json_response};
use crate::github::{REPOSITORY_MEDIA_TYPE, UpstreamRequest};
use crate::normalize::{
    NO_PERMISSION, NormalizeError, apply_permission_flags, apply_role_name, parse_object,
};
use crate::server::state::AppState;
use crate::utils::error::{ProxyError, Result};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::Value;
use tracing::{info, warn};

pub async fn get_team_repository(
    state: web::Data<AppState>,
    path: web::Path<TeamRepoPath>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let TeamRepoPath {
        org,
        team_slug,
        owner,
        repo,
    } = path.into_inner();
    let credential = credential(&req);

    info!(%org, %team_slug, %owner, %repo, "Getting team repository permission");

    let request = UpstreamRequest::get(&[
        "orgs", &org, "teams", &team_slug, "repos", &owner, &repo,
    ])
    .accept(REPOSITORY_MEDIA_TYPE);
    let response = state
        .github
        .execute(request, &credential)
        .await
        .map_err(|e| ProxyError::upstream(format!("Error getting team repository: {}", e)))?;

    if response.status != reqwest::StatusCode::OK {
        return Ok(forward_upstream(&response));
    }

    match normalize_team_repository(&response.body, &owner) {
        Ok(body) => Ok(json_response(StatusCode::OK, body)),
        Err(e) => {
            warn!(error = %e, "Failed to normalize team repository response, returning it unchanged");
            Ok(json_response(StatusCode::OK, response.body))
        }
    }
}

/// Rewrite a team repository document
///
/// `permission` comes from `role_name` when present, otherwise from the
/// highest flag in `permissions`. Both `permissions` and the nested `owner`
/// object are dropped and `owner` becomes the path owner.
pub fn normalize_team_repository(
    body: &[u8],
    owner: &str,
) -> std::result::Result<Vec<u8>, NormalizeError> {
    let mut data = parse_object(body)?;

    if !apply_role_name(&mut data) && !apply_permission_flags(&mut data, "permissions")? {
        data.insert(
            "permission".to_string(),
            Value::String(NO_PERMISSION.to_string()),
        );
    }

    data.remove("permissions");
    data.insert("owner".to_string(), Value::String(owner.to_string()));

    Ok(serde_json::to_vec(&data)?)
}
