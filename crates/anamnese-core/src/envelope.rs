//! Uniform JSON response envelope.
//!
//! Every endpoint answers `{success, message, data?}`; error paths answer
//! `{success: false, message}`. The envelope predates this rewrite — the
//! web frontend keys off the `success` flag, so the shape is part of the
//! wire contract.

use serde::Serialize;

/// Successful response body. `data` is omitted (not `null`) when absent,
/// except endpoints that promise `data: null` for a miss — those pass
/// `Some(Value::Null)` style payloads explicitly.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success with a payload.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Success with a message only.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}
