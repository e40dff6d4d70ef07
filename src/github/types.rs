//! Upstream record types

use crate::normalize::translate_role_name;
use serde::{Deserialize, Serialize};

/// User or organization reference embedded in upstream records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub login: String,
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub node_id: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default, rename = "type")]
    pub account_type: Option<String>,
}

/// Pending, not yet accepted repository invitation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: i64,
    #[serde(default)]
    pub node_id: Option<String>,
    /// Absent for invitations sent to an email address
    #[serde(default)]
    pub invitee: Option<Account>,
    #[serde(default)]
    pub inviter: Option<Account>,
    /// Single permission in upstream vocabulary (`read`, `write`, ...)
    #[serde(default)]
    pub permissions: String,
    /// Carried through as sent; never parsed
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub expired: bool,
}

impl Invitation {
    /// Whether this invitation was sent to `username` (ASCII case-insensitive)
    pub fn is_for(&self, username: &str) -> bool {
        self.invitee
            .as_ref()
            .is_some_and(|invitee| invitee.login.eq_ignore_ascii_case(username))
    }

    /// Invited permission in controller vocabulary
    pub fn permission(&self) -> String {
        translate_role_name(&self.permissions)
    }
}
