// Global error handling for HTTP middleware layers

use axum::{
    BoxError,
    http::StatusCode,
    response::IntoResponse,
};
use std::error::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
// Axum uses http_body_util for length-limiting
use http_body_util::LengthLimitError;
use tracing::{error, warn};

/// Maps errors raised by the middleware stack to HTTP status codes.
/// Over-limit bodies read by extractors are rejected by axum itself; the 413
/// branch covers services that surface `LengthLimitError` as a service error.
pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    status_for_error(&*err)
}

fn status_for_error(err: &(dyn Error + 'static)) -> StatusCode {
    // 413 if the body was too large
    if err.is::<LengthLimitError>() || find_cause::<LengthLimitError>(err).is_some() {
        warn!("Request body exceeded the configured limit: {err}");
        return StatusCode::PAYLOAD_TOO_LARGE;
    }

    // 408 if the request took too long
    if err.is::<Elapsed>() || find_cause::<Elapsed>(err).is_some() {
        warn!("Request timed out: {err}");
        return StatusCode::REQUEST_TIMEOUT;
    }

    // Otherwise, 500
    error!("Unhandled internal error: {err}");
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Helper function to find specific error type in error chain
pub fn find_cause<'a, T: Error + 'static>(err: &'a (dyn Error + 'static)) -> Option<&'a T> {
    let mut source: Option<&(dyn Error + 'static)> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}
