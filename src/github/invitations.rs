//! Pending invitation lookup
//!
//! Upstream has no "invitation for user" endpoint, so the repository's
//! invitation list is scanned page by page.

use super::client::{Credential, GitHubClient, UpstreamRequest};
use super::types::Invitation;
use crate::utils::error::Result;
use reqwest::StatusCode;
use tracing::{debug, info};

/// Find the pending invitation sent to `username`, if any
///
/// Stops at the first match, or at the first page shorter than the page
/// size. A page answered with anything but 200 ends the scan with `None`
/// (the credential may not be allowed to list invitations); a transport
/// failure or an undecodable page is an error.
pub async fn find_user_invitation(
    client: &GitHubClient,
    owner: &str,
    repo: &str,
    username: &str,
    credential: &Credential,
) -> Result<Option<Invitation>> {
    info!(
        "Checking invitations for user {} in repository {}/{}",
        username, owner, repo
    );

    let per_page = client.page_size();
    let mut page: u32 = 1;

    loop {
        let request = UpstreamRequest::get(&["repos", owner, repo, "invitations"])
            .query("per_page", per_page)
            .query("page", page);
        let response = client.execute(request, credential).await?;

        if response.status != StatusCode::OK {
            info!(
                status = response.status_code(),
                "Failed to get invitations, treating as no invitation"
            );
            return Ok(None);
        }

        let invitations: Vec<Invitation> = serde_json::from_slice(&response.body)?;
        let count = invitations.len();
        debug!(page, count, "Scanned invitation page");

        if let Some(invitation) = invitations.into_iter().find(|inv| inv.is_for(username)) {
            return Ok(Some(invitation));
        }

        if count < per_page as usize {
            return Ok(None);
        }

        page += 1;
    }
}
