//! Collaborator existence check
//!
//! `GET /repos/{owner}/{repo}/collaborators/{username}/permission` answers
//! with a permission even for users who were removed from the repository,
//! so every permission lookup has to be preceded by this check.

use super::client::{Credential, GitHubClient, UpstreamRequest};
use crate::utils::error::ProxyError;
use reqwest::StatusCode;
use tracing::debug;

/// Outcome of the collaborator existence check
#[derive(Debug)]
pub enum CollaboratorStatus {
    /// Upstream answered 204
    Collaborator,
    /// Upstream answered 404
    NotCollaborator,
    /// Any other status, or the call did not complete
    Unknown(ProxyError),
}

impl CollaboratorStatus {
    /// Interpret the status code of the existence check
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::NO_CONTENT => Self::Collaborator,
            StatusCode::NOT_FOUND => Self::NotCollaborator,
            other => Self::Unknown(ProxyError::upstream(format!(
                "unexpected status code: {}",
                other.as_u16()
            ))),
        }
    }

    pub fn is_collaborator(&self) -> bool {
        matches!(self, Self::Collaborator)
    }
}

/// `GET /repos/{owner}/{repo}/collaborators/{username}`
pub async fn check_collaborator(
    client: &GitHubClient,
    owner: &str,
    repo: &str,
    username: &str,
    credential: &Credential,
) -> CollaboratorStatus {
    let request = UpstreamRequest::get(&["repos", owner, repo, "collaborators", username]);

    let status = match client.execute(request, credential).await {
        Ok(response) => CollaboratorStatus::from_status(response.status),
        Err(e) => CollaboratorStatus::Unknown(e),
    };

    debug!(owner, repo, username, ?status, "Resolved collaborator status");
    status
}
