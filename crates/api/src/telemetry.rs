use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::RunMode;

/// Filter used when `RUST_LOG` is not set. Store logging is silenced
/// entirely in production.
pub fn default_filter(mode: RunMode) -> &'static str {
    match mode {
        RunMode::Development => "debug,sqlx=debug,tower_http=debug",
        RunMode::Production => "info,sqlx=off",
    }
}

pub fn init(mode: RunMode) {
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter(mode).into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
