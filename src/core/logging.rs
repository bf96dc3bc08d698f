// Start of file: /src/core/logging.rs

use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::fmt::format::FmtSpan;

use crate::config::environment::EnvironmentVariables;

/// Filter used when `RUST_LOG` is not set: verbose outside production.
pub fn default_filter(env: &EnvironmentVariables) -> &'static str {
    if env.is_production() {
        "hello_azure=info,axum=info"
    } else {
        "hello_azure=debug,axum=debug"
    }
}

// Initialize the tracing subscriber; RUST_LOG takes precedence over the default filter
pub fn init_tracing(env: &EnvironmentVariables) {
    let env_filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(env)));

    fmt()
        .with_env_filter(env_filter)
        .with_span_events(FmtSpan::CLOSE)
        .init();
}


// End of file: /src/core/logging.rs
