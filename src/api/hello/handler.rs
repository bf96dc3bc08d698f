// Start of file: /src/api/hello/handler.rs

use axum::http::StatusCode;

/// Body returned by `GET /`.
pub const GREETING: &str = "Hello, Azure!";

/// Answers the root path with a fixed plain-text greeting.
#[tracing::instrument(level = "debug")]
pub async fn hello_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, GREETING)
}


// End of file: /src/api/hello/handler.rs
