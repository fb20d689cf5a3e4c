//! Codec error types.

use thiserror::Error;

use crate::path::FieldPath;

/// Failure while reading a value from the wire.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("at {path}: expected {expected}, found {actual}")]
    Shape {
        path: FieldPath,
        expected: &'static str,
        actual: String,
    },
    #[error("at {path}: unknown {kind} discriminator {value}")]
    UnknownVariant {
        path: FieldPath,
        kind: &'static str,
        value: String,
    },
    #[error("at {path}: {message}")]
    Invalid { path: FieldPath, message: String },
}

impl DecodeError {
    /// Builds a shape mismatch for `value` found where `expected` was declared.
    pub fn shape(path: &FieldPath, expected: &'static str, value: &serde_json::Value) -> Self {
        Self::Shape {
            path: path.clone(),
            expected,
            actual: describe(value),
        }
    }

    pub fn invalid(path: &FieldPath, message: impl Into<String>) -> Self {
        Self::Invalid {
            path: path.clone(),
            message: message.into(),
        }
    }

    /// Path of the offending field, if the failure is tied to one.
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            Self::Syntax(_) => None,
            Self::Shape { path, .. }
            | Self::UnknownVariant { path, .. }
            | Self::Invalid { path, .. } => Some(path),
        }
    }
}

/// Failure while writing a value to the wire.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("at {path}: non-finite number cannot be represented in JSON")]
    NonFinite { path: FieldPath },
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Contract violation: the value of an unset optional was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal read of unset optional")]
pub struct UnsetReadError;

/// Short human description of a JSON value's shape.
pub(crate) fn describe(value: &serde_json::Value) -> String {
    use serde_json::Value;
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(_) => "string".to_owned(),
        Value::Array(a) => format!("array of {} elements", a.len()),
        Value::Object(_) => "object".to_owned(),
    }
}
