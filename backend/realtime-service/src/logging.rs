//! Logging initialization

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber. `RUST_LOG` overrides the default
/// filter, which quiets the noisier dependency crates.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,lettre=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
