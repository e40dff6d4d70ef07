//! Normalization of upstream payloads
//!
//! The upstream API reports permissions in a different vocabulary than the
//! one the controller works with, and nests the fields the controller
//! compares under a `user` object. Everything in here is a pure transform
//! over `serde_json` values.

mod error;
pub mod flatten;
pub mod permission;

pub use error::NormalizeError;
pub use flatten::{
    FieldMapping, ResponseFlattener, add_field, extract_value, message_body, parse_object,
    read_field,
};
pub use permission::{
    NO_PERMISSION, PermissionFlags, PermissionLevel, apply_permission_flags, apply_role_name,
    rewrite_invitation_request, translate_role_name, translate_to_upstream,
};
