//! Permission vocabulary translation
//!
//! The controller speaks `pull`/`push`/`admin`/`maintain`/`triage`. Upstream
//! reports a `role_name` using `read`/`write` in place of `pull`/`push`, and
//! invitations carry a single `permissions` string in that same upstream
//! vocabulary.
//!
//! | controller | upstream `role_name` |
//! |------------|----------------------|
//! | pull       | read                 |
//! | push       | write                |
//! | admin      | admin                |
//! | maintain   | maintain             |
//! | triage     | triage               |

use super::error::NormalizeError;
use super::flatten::parse_object;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Value written when a permission flag set has no flag enabled
pub const NO_PERMISSION: &str = "none";

/// Permission level in the controller vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionLevel {
    Pull,
    Push,
    Admin,
    Maintain,
    Triage,
}

impl PermissionLevel {
    pub const ALL: [PermissionLevel; 5] = [
        PermissionLevel::Pull,
        PermissionLevel::Push,
        PermissionLevel::Admin,
        PermissionLevel::Maintain,
        PermissionLevel::Triage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pull => "pull",
            Self::Push => "push",
            Self::Admin => "admin",
            Self::Maintain => "maintain",
            Self::Triage => "triage",
        }
    }

    /// Name of this level in the upstream role vocabulary
    pub fn upstream_name(&self) -> &'static str {
        match self {
            Self::Pull => "read",
            Self::Push => "write",
            Self::Admin => "admin",
            Self::Maintain => "maintain",
            Self::Triage => "triage",
        }
    }

    /// Resolve an upstream `role_name`; matching is exact
    pub fn from_role_name(role_name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.upstream_name() == role_name)
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("unknown permission level: {}", s))
    }
}

/// Translate an upstream `role_name` into the controller vocabulary
///
/// Unknown role names (custom repository roles, future additions, other
/// casings) pass through unchanged.
pub fn translate_role_name(role_name: &str) -> String {
    match PermissionLevel::from_role_name(role_name) {
        Some(level) => level.as_str().to_string(),
        None => role_name.to_string(),
    }
}

/// Translate a controller permission into the upstream vocabulary
///
/// Unknown values pass through unchanged.
pub fn translate_to_upstream(permission: &str) -> String {
    match permission.parse::<PermissionLevel>() {
        Ok(level) => level.upstream_name().to_string(),
        Err(_) => permission.to_string(),
    }
}

/// Boolean permission set reported alongside repositories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionFlags {
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub maintain: bool,
    #[serde(default)]
    pub push: bool,
    #[serde(default)]
    pub triage: bool,
    #[serde(default)]
    pub pull: bool,
}

impl PermissionFlags {
    /// Highest level present, in the order admin > maintain > push > triage > pull
    ///
    /// The flag set is cumulative upstream (an admin also has push and pull),
    /// so only a fixed precedence yields a single answer.
    pub fn highest(&self) -> Option<PermissionLevel> {
        if self.admin {
            Some(PermissionLevel::Admin)
        } else if self.maintain {
            Some(PermissionLevel::Maintain)
        } else if self.push {
            Some(PermissionLevel::Push)
        } else if self.triage {
            Some(PermissionLevel::Triage)
        } else if self.pull {
            Some(PermissionLevel::Pull)
        } else {
            None
        }
    }

    /// Highest level as a string, or [`NO_PERMISSION`]
    pub fn permission(&self) -> &'static str {
        self.highest()
            .map(|level| level.as_str())
            .unwrap_or(NO_PERMISSION)
    }
}

/// Set `permission` from a string `role_name`, if there is one
///
/// Returns whether the document was changed.
pub fn apply_role_name(data: &mut Map<String, Value>) -> bool {
    let Some(role_name) = data.get("role_name").and_then(Value::as_str) else {
        return false;
    };
    if role_name.is_empty() {
        return false;
    }

    let permission = translate_role_name(role_name);
    data.insert("permission".to_string(), Value::String(permission));
    true
}

/// Set `permission` from the boolean set stored under `key`, if there is one
///
/// Returns whether the document was changed.
pub fn apply_permission_flags(
    data: &mut Map<String, Value>,
    key: &str,
) -> Result<bool, NormalizeError> {
    let Some(flags) = data.get(key) else {
        return Ok(false);
    };

    let flags: PermissionFlags = serde_json::from_value(flags.clone())?;
    data.insert(
        "permission".to_string(),
        Value::String(flags.permission().to_string()),
    );
    Ok(true)
}

/// Rewrite a controller request body for the invitation update endpoint
///
/// `{"permission": "pull"}` becomes `{"permissions": "read"}`. Note that the
/// invitation's `permissions` is a single string, not the boolean object the
/// collaborator endpoints use. A body without a string `permission` is
/// returned unchanged.
pub fn rewrite_invitation_request(body: &[u8]) -> Result<Vec<u8>, NormalizeError> {
    let mut data = parse_object(body)?;

    let Some(permission) = data.get("permission").and_then(Value::as_str) else {
        return Ok(body.to_vec());
    };

    let permissions = translate_to_upstream(permission);
    data.remove("permission");
    data.insert("permissions".to_string(), Value::String(permissions));

    Ok(serde_json::to_vec(&data)?)
}
