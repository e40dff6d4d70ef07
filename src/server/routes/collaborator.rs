//! Collaborator endpoints
//!
//! - `GET    /repository/{owner}/{repo}/collaborators/{username}/permission`
//! - `POST   /repository/{owner}/{repo}/collaborators/{username}`
//! - `PATCH  /repository/{owner}/{repo}/collaborators/{username}`
//! - `DELETE /repository/{owner}/{repo}/collaborators/{username}`
//!
//! PATCH and DELETE fall back to the user's pending invitation when the
//! user is not (yet) a collaborator.

use super::{CollaboratorPath, credential, forward_upstream, json_response, message_response};
use crate::github::{
    CollaboratorStatus, Credential, UpstreamRequest, check_collaborator, find_user_invitation,
};
use crate::normalize::{
    NormalizeError, ResponseFlattener, add_field, apply_role_name, parse_object, read_field,
    rewrite_invitation_request,
};
use crate::server::state::AppState;
use crate::utils::error::{ProxyError, Result};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::Value;
use tracing::{info, warn};

/// `GET .../collaborators/{username}/permission`
pub async fn get_permission(
    state: web::Data<AppState>,
    path: web::Path<CollaboratorPath>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let CollaboratorPath {
        owner,
        repo,
        username,
    } = path.into_inner();
    let credential = credential(&req);

    info!(%owner, %repo, %username, "Getting collaborator permission");

    match check_collaborator(&state.github, &owner, &repo, &username, &credential).await {
        CollaboratorStatus::Collaborator => {}
        CollaboratorStatus::NotCollaborator => {
            info!(%owner, %repo, %username, "User is not a collaborator");
            return Ok(message_response(
                StatusCode::NOT_FOUND,
                "User is not a collaborator of the repository or the user does not exist",
            ));
        }
        CollaboratorStatus::Unknown(e) => return Err(status_check_failed(e)),
    }

    let request =
        UpstreamRequest::get(&["repos", &owner, &repo, "collaborators", &username, "permission"]);
    let response = state
        .github
        .execute(request, &credential)
        .await
        .map_err(|e| ProxyError::upstream(format!("Error getting user permission: {}", e)))?;

    if response.status != reqwest::StatusCode::OK {
        return Ok(forward_upstream(&response));
    }

    match normalize_permission(&response.body, &owner, &repo) {
        Ok(body) => Ok(json_response(StatusCode::OK, body)),
        Err(e) => {
            warn!(error = %e, "Failed to normalize permission response, returning it unchanged");
            Ok(json_response(StatusCode::OK, response.body))
        }
    }
}

/// `POST .../collaborators/{username}`
///
/// Adds the user; upstream creates an invitation unless the user is already
/// a collaborator.
pub async fn add_collaborator(
    state: web::Data<AppState>,
    path: web::Path<CollaboratorPath>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let CollaboratorPath {
        owner,
        repo,
        username,
    } = path.into_inner();
    let credential = credential(&req);
    let permission = requested_permission(&body)?;

    info!(%owner, %repo, %username, %permission, "Adding collaborator");

    let response = state
        .github
        .execute(collaborator_put(&owner, &repo, &username, body), &credential)
        .await
        .map_err(|e| ProxyError::upstream(format!("Error adding user: {}", e)))?;

    Ok(match response.status {
        reqwest::StatusCode::CREATED => message_response(
            StatusCode::ACCEPTED,
            format!(
                "Invitation sent to user {} for repository {}/{} with permission {}",
                username, owner, repo, permission
            ),
        ),
        reqwest::StatusCode::NO_CONTENT => HttpResponse::NoContent().finish(),
        _ => forward_upstream(&response),
    })
}

/// `PATCH .../collaborators/{username}`
pub async fn update_permission(
    state: web::Data<AppState>,
    path: web::Path<CollaboratorPath>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let CollaboratorPath {
        owner,
        repo,
        username,
    } = path.into_inner();
    let credential = credential(&req);
    let permission = requested_permission(&body)?;

    info!(%owner, %repo, %username, %permission, "Updating collaborator permission");

    match check_collaborator(&state.github, &owner, &repo, &username, &credential).await {
        CollaboratorStatus::Collaborator => {
            let response = state
                .github
                .execute(collaborator_put(&owner, &repo, &username, body), &credential)
                .await
                .map_err(|e| ProxyError::upstream(format!("Error updating permission: {}", e)))?;

            Ok(match response.status {
                reqwest::StatusCode::NO_CONTENT => message_response(
                    StatusCode::OK,
                    format!(
                        "Permission updated successfully for collaborator {} with permission {}",
                        username, permission
                    ),
                ),
                _ => forward_upstream(&response),
            })
        }
        CollaboratorStatus::NotCollaborator => {
            let Some(invitation) =
                pending_invitation(&state, &owner, &repo, &username, &credential).await?
            else {
                return Ok(no_invitation(&username));
            };

            let payload = rewrite_invitation_request(&body)?;
            let id = invitation.id.to_string();
            let request = UpstreamRequest::patch(&["repos", &owner, &repo, "invitations", &id])
                .json_body(payload);
            let response = state
                .github
                .execute(request, &credential)
                .await
                .map_err(|e| ProxyError::upstream(format!("Error updating permission: {}", e)))?;

            Ok(match response.status {
                reqwest::StatusCode::OK => message_response(
                    StatusCode::ACCEPTED,
                    format!(
                        "Invitation permission updated successfully for user {} with permission {}",
                        username, permission
                    ),
                ),
                _ => forward_upstream(&response),
            })
        }
        CollaboratorStatus::Unknown(e) => Err(status_check_failed(e)),
    }
}

/// `DELETE .../collaborators/{username}`
pub async fn remove_collaborator(
    state: web::Data<AppState>,
    path: web::Path<CollaboratorPath>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let CollaboratorPath {
        owner,
        repo,
        username,
    } = path.into_inner();
    let credential = credential(&req);

    info!(%owner, %repo, %username, "Removing collaborator");

    match check_collaborator(&state.github, &owner, &repo, &username, &credential).await {
        CollaboratorStatus::Collaborator => {
            let request =
                UpstreamRequest::delete(&["repos", &owner, &repo, "collaborators", &username]);
            let response = state
                .github
                .execute(request, &credential)
                .await
                .map_err(|e| ProxyError::upstream(format!("Error removing user: {}", e)))?;

            Ok(match response.status {
                reqwest::StatusCode::NO_CONTENT => message_response(
                    StatusCode::OK,
                    format!(
                        "Collaborator {} removed successfully from repository {}/{}",
                        username, owner, repo
                    ),
                ),
                _ => forward_upstream(&response),
            })
        }
        CollaboratorStatus::NotCollaborator => {
            let Some(invitation) =
                pending_invitation(&state, &owner, &repo, &username, &credential).await?
            else {
                return Ok(no_invitation(&username));
            };

            let id = invitation.id.to_string();
            let request = UpstreamRequest::delete(&["repos", &owner, &repo, "invitations", &id]);
            let response = state
                .github
                .execute(request, &credential)
                .await
                .map_err(|e| ProxyError::upstream(format!("Error removing user: {}", e)))?;

            Ok(match response.status {
                reqwest::StatusCode::NO_CONTENT => message_response(
                    StatusCode::ACCEPTED,
                    format!("Invitation cancelled successfully for user {}", username),
                ),
                _ => forward_upstream(&response),
            })
        }
        CollaboratorStatus::Unknown(e) => Err(status_check_failed(e)),
    }
}

/// `permission` from a controller request body
///
/// The body must be a JSON object carrying a string `permission`.
pub fn requested_permission(body: &[u8]) -> Result<String> {
    match read_field(body, "permission") {
        Ok(Value::String(permission)) => Ok(permission),
        Ok(other) => Err(ProxyError::bad_request(format!(
            "Error reading permission from request body: expected a string, got {}",
            other
        ))),
        Err(e) => Err(ProxyError::bad_request(format!(
            "Error reading permission from request body: {}",
            e
        ))),
    }
}

/// Flatten the permission response and restate `permission` in the
/// controller vocabulary
pub fn normalize_permission(
    body: &[u8],
    owner: &str,
    repo: &str,
) -> std::result::Result<Vec<u8>, NormalizeError> {
    let data = parse_object(body)?;
    let mut data = ResponseFlattener::user_permission().flatten(&data)?;
    apply_role_name(&mut data);

    let permission = match data.get("permission") {
        Some(Value::String(permission)) => permission.clone(),
        Some(other) => other.to_string(),
        None => {
            return Err(NormalizeError::FieldNotFound {
                field: "permission".to_string(),
                path: "permission".to_string(),
            });
        }
    };

    add_field(
        &serde_json::to_vec(&data)?,
        "message",
        format!(
            "User is a collaborator of the repository {}/{} with permission {}",
            owner, repo, permission
        ),
    )
}

fn collaborator_put<'a>(
    owner: &'a str,
    repo: &'a str,
    username: &'a str,
    body: web::Bytes,
) -> UpstreamRequest<'a> {
    UpstreamRequest::put(&["repos", owner, repo, "collaborators", username]).json_body(body)
}

async fn pending_invitation(
    state: &AppState,
    owner: &str,
    repo: &str,
    username: &str,
    credential: &Credential,
) -> Result<Option<crate::github::Invitation>> {
    find_user_invitation(&state.github, owner, repo, username, credential)
        .await
        .map_err(|e| ProxyError::upstream(format!("error checking invitations: {}", e)))
}

fn no_invitation(username: &str) -> HttpResponse {
    info!(%username, "No collaborator or pending invitation found");
    message_response(
        StatusCode::NOT_FOUND,
        format!(
            "User {} is not a collaborator and has no pending invitation",
            username
        ),
    )
}

fn status_check_failed(e: ProxyError) -> ProxyError {
    ProxyError::upstream(format!("Error checking collaborator status: {}", e))
}
