use axum::http::StatusCode;

/// Handler for `GET /healthz` — process liveness probe.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — readiness probe. The api service answers OK
/// as soon as it is serving; startup already blocks on the database
/// connection, so there is no separate warm-up state to report.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
