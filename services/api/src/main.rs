use std::time::Duration;

use sea_orm::{ConnectOptions, Database};
use tracing::info;

use anamnese_api::config::ApiConfig;
use anamnese_api::router::build_router;
use anamnese_api::state::AppState;

#[tokio::main]
async fn main() {
    anamnese_core::tracing::init_tracing();

    let config = ApiConfig::from_env();

    // Bounded store calls: a stuck pool turns into a storage error instead
    // of a hung request.
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .connect_timeout(Duration::from_secs(config.db_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.db_timeout_secs));

    let db = Database::connect(options)
        .await
        .expect("failed to connect to database");

    let state = AppState { db };
    let router = build_router(state);

    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("anamnese api listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
