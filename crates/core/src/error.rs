//! Validation error types.

use serde::Serialize;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Dotted path to the offending field (e.g. `position.z`).
    pub field: String,
    /// Why the field was rejected.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Aggregated validation failure for one request body.
///
/// Carries every failing field, not just the first, so a client can fix a
/// whole payload in one round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("validation failed on {} field(s)", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}
