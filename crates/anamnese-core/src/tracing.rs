use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured stdout tracing for a service binary. JSON lines,
/// filtered by the `RUST_LOG` env var.
///
/// Idempotent: a second call (tests, embedded runners) is silently ignored
/// instead of panicking on the already-set global subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().json())
        .try_init();
}
