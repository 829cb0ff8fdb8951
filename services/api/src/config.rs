/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3110). Env var: `API_PORT`.
    pub api_port: u16,
    /// Store-call timeout in seconds (default 10). Bounds connection
    /// acquisition so a stuck pool surfaces as a storage error instead of
    /// hanging a request. Env var: `DB_TIMEOUT_SECS`.
    pub db_timeout_secs: u64,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            api_port: std::env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3110),
            db_timeout_secs: std::env::var("DB_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}
