//! Session-token encoding and decoding.
//!
//! The token is a Base64-encoded JSON object, NOT a signed credential:
//! anyone can forge one. This matches the system being reimplemented and
//! is a documented weakness — the token gates convenience features
//! (scoped listing), not anything security-critical.

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

/// Claims carried by a professional session token.
///
/// `timestamp` is the issuing time in milliseconds since the UNIX epoch.
/// Tokens do not expire; the check endpoint re-verifies the professional
/// still exists instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    pub id: i32,
    pub nome: String,
    pub email: String,
    pub timestamp: i64,
}

/// Errors returned by [`decode_session_token`].
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,
}

/// Encode claims as `base64(JSON)`.
pub fn encode_session_token(claims: &SessionToken) -> String {
    let json = serde_json::to_vec(claims).expect("session token serializes");
    STANDARD.encode(json)
}

/// Decode a `base64(JSON)` token back into claims.
///
/// Any failure (bad Base64, bad UTF-8, bad JSON, missing fields) collapses
/// into [`TokenError::Malformed`] — callers treat a malformed token as an
/// anonymous request, not a hard error.
pub fn decode_session_token(token: &str) -> Result<SessionToken, TokenError> {
    let bytes = STANDARD.decode(token.trim()).map_err(|_| TokenError::Malformed)?;
    serde_json::from_slice(&bytes).map_err(|_| TokenError::Malformed)
}
