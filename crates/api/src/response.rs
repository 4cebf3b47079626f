//! Shared response envelope types for API handlers.
//!
//! All success responses use the `{ "success": true, "data": ..., "message"?: ... }`
//! envelope. Use [`Envelope`] instead of ad-hoc `serde_json::json!({ ... })`
//! to get compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard success envelope.
///
/// `success` is always `true` here: failures never pass through this type,
/// they are produced by the error path ([`crate::error::AppError`]).
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::new(items)))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub data: T,
    /// Human-readable confirmation, omitted from the JSON when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap `data` with no message.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    /// Wrap `data` with a confirmation message.
    ///
    /// An empty message is treated as absent.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            success: true,
            data,
            message: (!message.is_empty()).then_some(message),
        }
    }
}
