//! Response flattening
//!
//! Copies nested values to the root of a JSON object while keeping every
//! original root key.

use super::error::NormalizeError;
use serde_json::{Map, Value, json};
use std::borrow::Cow;

/// Where to read a value from and which root key to write it to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    /// Dot separated path, e.g. `user.html_url`
    pub source_path: Cow<'static, str>,
    /// Root level key the value is written to
    pub target_key: Cow<'static, str>,
}

impl FieldMapping {
    pub const fn new(source_path: &'static str, target_key: &'static str) -> Self {
        Self {
            source_path: Cow::Borrowed(source_path),
            target_key: Cow::Borrowed(target_key),
        }
    }

    pub fn owned(source_path: impl Into<String>, target_key: impl Into<String>) -> Self {
        Self {
            source_path: Cow::Owned(source_path.into()),
            target_key: Cow::Owned(target_key.into()),
        }
    }
}

/// Brings the nested `user` fields of a collaborator permission response to the root
pub const USER_PERMISSION_MAPPINGS: &[FieldMapping] = &[
    FieldMapping::new("user.permissions", "permissions"),
    FieldMapping::new("user.html_url", "html_url"),
    FieldMapping::new("user.id", "id"),
];

/// Applies an ordered list of [`FieldMapping`]s
#[derive(Debug, Clone)]
pub struct ResponseFlattener {
    mappings: Cow<'static, [FieldMapping]>,
}

impl ResponseFlattener {
    pub fn new(mappings: Vec<FieldMapping>) -> Self {
        Self {
            mappings: Cow::Owned(mappings),
        }
    }

    /// Flattener for `GET /repos/{owner}/{repo}/collaborators/{username}/permission`
    pub const fn user_permission() -> Self {
        Self {
            mappings: Cow::Borrowed(USER_PERMISSION_MAPPINGS),
        }
    }

    pub fn mappings(&self) -> &[FieldMapping] {
        &self.mappings
    }

    /// Flatten a parsed object
    ///
    /// Mappings are applied in order, so the last one wins when two share a
    /// target key. Any unresolvable source path fails the whole call.
    pub fn flatten(&self, data: &Map<String, Value>) -> Result<Map<String, Value>, NormalizeError> {
        let mut flattened = data.clone();

        for mapping in self.mappings.iter() {
            let value = extract_value(data, &mapping.source_path)?;
            flattened.insert(mapping.target_key.to_string(), value.clone());
        }

        Ok(flattened)
    }

    /// Flatten a raw JSON body
    pub fn flatten_bytes(&self, body: &[u8]) -> Result<Vec<u8>, NormalizeError> {
        let data = parse_object(body)?;
        let flattened = self.flatten(&data)?;
        Ok(serde_json::to_vec(&flattened)?)
    }
}

/// Resolve a dot separated path inside `data`
pub fn extract_value<'a>(
    data: &'a Map<String, Value>,
    path: &str,
) -> Result<&'a Value, NormalizeError> {
    let parts: Vec<&str> = path.split('.').collect();
    if parts.iter().any(|part| part.is_empty()) {
        return Err(NormalizeError::InvalidPath(path.to_string()));
    }

    let (last, intermediate) = parts
        .split_last()
        .ok_or_else(|| NormalizeError::InvalidPath(path.to_string()))?;

    let mut current = data;
    for part in intermediate {
        let next = current
            .get(*part)
            .ok_or_else(|| NormalizeError::FieldNotFound {
                field: part.to_string(),
                path: path.to_string(),
            })?;

        current = next
            .as_object()
            .ok_or_else(|| NormalizeError::NotTraversable {
                field: part.to_string(),
                path: path.to_string(),
            })?;
    }

    current
        .get(*last)
        .ok_or_else(|| NormalizeError::FieldNotFound {
            field: last.to_string(),
            path: path.to_string(),
        })
}

/// Decode a body that must be a JSON object
pub fn parse_object(body: &[u8]) -> Result<Map<String, Value>, NormalizeError> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Object(map) => Ok(map),
        _ => Err(NormalizeError::NotAnObject),
    }
}

/// Set one root key and re-serialize
pub fn add_field(
    body: &[u8],
    field: &str,
    value: impl Into<Value>,
) -> Result<Vec<u8>, NormalizeError> {
    let mut data = parse_object(body)?;
    data.insert(field.to_string(), value.into());
    Ok(serde_json::to_vec(&data)?)
}

/// Read one root key
pub fn read_field(body: &[u8], field: &str) -> Result<Value, NormalizeError> {
    let mut data = parse_object(body)?;
    data.remove(field).ok_or_else(|| NormalizeError::FieldNotFound {
        field: field.to_string(),
        path: field.to_string(),
    })
}

/// `{"message": ...}`
pub fn message_body(message: impl Into<String>) -> Value {
    json!({ "message": message.into() })
}
