use thiserror::Error;

/// Failure while reshaping or translating a JSON document
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("failed to decode JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("expected a JSON object at the document root")]
    NotAnObject,

    #[error("field {field} not found in path {path}")]
    FieldNotFound { field: String, path: String },

    #[error("field {field} is not an object in path {path}")]
    NotTraversable { field: String, path: String },

    #[error("invalid path {0:?}")]
    InvalidPath(String),
}
