//! tests/common/mod.rs
//! A shared test helper to spawn the app on an ephemeral port.

#![allow(dead_code)]

use axum::{Router, serve};
use hello_azure::config::environment::EnvironmentVariables;
use hello_azure::core::server::{create_app, with_middleware};
use tokio::net::TcpListener as TokioTcpListener;

/// Spawns the real application and returns its base URL.
pub fn spawn_app() -> String {
    spawn_router(create_app(&EnvironmentVariables::default()))
}

/// Spawns `routes` behind the production middleware stack, configured by `env`.
pub fn spawn_with_middleware(routes: Router, env: EnvironmentVariables) -> String {
    let app: Router = with_middleware(routes, &env);
    spawn_router(app)
}

fn spawn_router(app: Router) -> String {
    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    format!("http://{}", addr)
}
