//! Optional professional identity extracted from the request.

use axum::extract::FromRequestParts;
use axum_extra::extract::cookie::CookieJar;
use http::request::Parts;

use crate::token::{SessionToken, decode_session_token};

/// Cookie fallback used by the web frontend when no Authorization header
/// is sent.
pub const PROFISSIONAL_TOKEN_COOKIE: &str = "profissional_token";

/// Professional identity carried by `Authorization: Bearer <token>` or the
/// `profissional_token` cookie.
///
/// Extraction never rejects: a missing or malformed token yields an
/// anonymous identity. Endpoints that require a professional enforce that
/// themselves after extraction.
#[derive(Debug, Clone, Default)]
pub struct SessionIdentity {
    pub token: Option<SessionToken>,
}

impl SessionIdentity {
    /// Id of the authenticated professional, if any.
    pub fn professional_id(&self) -> Option<i32> {
        self.token.as_ref().map(|t| t.id)
    }
}

fn bearer_value(parts: &Parts) -> Option<String> {
    let header = parts.headers.get(http::header::AUTHORIZATION)?;
    let value = header.to_str().ok()?;
    value
        .strip_prefix("Bearer ")
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
}

fn cookie_value(parts: &Parts) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    jar.get(PROFISSIONAL_TOKEN_COOKIE)
        .map(|c| c.value().to_owned())
}

impl<S> FromRequestParts<S> for SessionIdentity
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let raw = bearer_value(parts).or_else(|| cookie_value(parts));
        let token = raw.and_then(|value| match decode_session_token(&value) {
            Ok(claims) => Some(claims),
            Err(_) => {
                tracing::debug!("ignoring malformed session token");
                None
            }
        });
        async move { Ok(SessionIdentity { token }) }
    }
}
