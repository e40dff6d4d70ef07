//! Upstream GitHub API access
//!
//! The client forwards the caller's credential untouched; the resolver and
//! locator build the two lookups the orchestrators share.

pub mod client;
pub mod collaborator;
pub mod invitations;
pub mod types;

pub use client::{Credential, GitHubClient, UpstreamRequest, UpstreamResponse};
pub use collaborator::{CollaboratorStatus, check_collaborator};
pub use invitations::find_user_invitation;
pub use types::{Account, Invitation};

/// Media type the team repository endpoint needs to return permissions
pub const REPOSITORY_MEDIA_TYPE: &str = "application/vnd.github.v3.repository+json";
