// Application server configuration and setup

use std::time::Duration;
use axum::{
    Router,
    middleware::from_fn,
    extract::DefaultBodyLimit,
    error_handling::HandleErrorLayer,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::{Context, Result};

use crate::api::hello::routes::hello_routes;
use crate::config::environment::EnvironmentVariables;
use crate::utils::{
    error_handler::handle_global_error,
    request_logger::log_requests,
};

/// Wraps `router` with the logging, error, timeout and body-limit layers
pub fn with_middleware(router: Router, env: &EnvironmentVariables) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(from_fn(log_requests))
            .layer(HandleErrorLayer::new(handle_global_error))
            .layer(TimeoutLayer::new(Duration::from_secs(env.default_timeout_seconds)))
            .layer(DefaultBodyLimit::max(env.max_request_body_size))
    )
}

/// Creates the application router with all middleware layers
pub fn create_app(env: &EnvironmentVariables) -> Router {
    with_middleware(hello_routes(), env)
}

/// Takes a socket passed in by the environment (systemfd) or binds a new one
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = env.bind_address();
            TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?
        }
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install TERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutting down via Ctrl+C"),
        _ = terminate => tracing::info!("Shutting down via TERM signal"),
    }
}
