// Start of file: /src/utils/request_logger.rs

use std::time::{Duration, Instant};
use axum::{
    body::Body,
    http::{Method, Request, Response},
    middleware::Next,
};
use tracing::{info, warn};

/// Logs method, path, status and latency of every request.
/// The response passes through untouched.
pub async fn log_requests(req: Request<Body>, next: Next) -> Response<Body> {
    let start: Instant = Instant::now();
    let method: Method = req.method().clone();
    let path: String = req.uri().path().to_owned();

    let response: Response<Body> = next.run(req).await;

    let elapsed: Duration = start.elapsed();
    let status: u16 = response.status().as_u16();

    if response.status().is_server_error() {
        warn!(%method, %path, status, elapsed_ms = elapsed.as_millis() as u64, "request failed");
    } else {
        info!(%method, %path, status, elapsed_ms = elapsed.as_millis() as u64, "request completed");
    }

    response
}

// End of file: /src/utils/request_logger.rs
