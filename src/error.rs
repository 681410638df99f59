//! Error types for field access and the command-line front end.

use miette::Diagnostic;
use thiserror::Error;

/// Message for a missing container or empty field path.
pub const INVALID_FIELD_PATH: &str = r#"Incorrect "obj" or "fieldPath" passed in."#;

/// Message for a missing reset target or empty field key.
pub const INVALID_FIELD: &str = r#"Incorrect "obj" or "field" passed in."#;

pub type Result<T> = std::result::Result<T, AccessError>;

/// Unified error type for every fieldpath failure mode.
#[derive(Debug, Error, Diagnostic)]
pub enum AccessError {
    #[error("{message}")]
    #[diagnostic(
        code(fieldpath::invalid_argument),
        help("pass a non-null container and a path with at least one non-empty segment")
    )]
    InvalidArgument { message: &'static str },

    #[error("I/O error: {0}")]
    #[diagnostic(code(fieldpath::io))]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    #[diagnostic(code(fieldpath::json), help("values and documents must be valid JSON"))]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    #[diagnostic(code(fieldpath::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl AccessError {
    pub fn invalid_field_path() -> Self {
        AccessError::InvalidArgument {
            message: INVALID_FIELD_PATH,
        }
    }

    pub fn invalid_field() -> Self {
        AccessError::InvalidArgument {
            message: INVALID_FIELD,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, AccessError::InvalidArgument { .. })
    }
}
