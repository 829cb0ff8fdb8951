use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use anamnese_core::health::{healthz, readyz};
use anamnese_core::middleware::request_id_layer;

use crate::handlers::{
    anamnese::submit_anamnese,
    clients::{get_clients, search_clients},
    professionals::{
        check_email, check_session, login_professional, reset_password, signup_professional,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Anamnese submissions
        .route("/anamnese-submissions", post(submit_anamnese))
        // Clients (lookup + listing share the route; see get_clients)
        .route("/clients", get(get_clients))
        .route("/clients/search", get(search_clients))
        // Professionals
        .route("/professionals", post(signup_professional))
        .route("/professionals/session", post(login_professional))
        .route("/professionals/session", get(check_session))
        .route("/professionals/password", post(reset_password))
        .route("/professionals/email-check", post(check_email))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
