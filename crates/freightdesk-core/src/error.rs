//! Error types module
//!
//! Domain-level errors for Freightdesk. Validation failures carry the full
//! field -> message map so callers can render errors inline; everything the
//! backend rejects surfaces as an `Api` error whose message is the backend's
//! `error`/`message` field.

use std::collections::BTreeMap;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed for {} field(s)", errors.len())]
    ValidationFailed {
        errors: BTreeMap<&'static str, String>,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },
}

impl AppError {
    /// Build a validation error from a non-empty error map.
    pub fn validation(errors: BTreeMap<&'static str, String>) -> Self {
        AppError::ValidationFailed { errors }
    }

    /// The per-field error map, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&BTreeMap<&'static str, String>> {
        match self {
            AppError::ValidationFailed { errors } => Some(errors),
            _ => None,
        }
    }
}
