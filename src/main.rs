// Start of file: src/main.rs

use axum::{Router, serve};
use tokio::net::TcpListener;

use hello_azure::config::environment::EnvironmentVariables;
use hello_azure::core::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env: EnvironmentVariables = EnvironmentVariables::load()?;

    logging::init_tracing(&env);
    tracing::debug!("Loaded environment configuration: {:#?}", env);

    let app: Router = server::create_app(&env);
    let listener: TcpListener = server::setup_listener(&env).await?;

    tracing::info!(
        environment = %env.environment,
        "Server listening on: {}",
        listener.local_addr()?
    );

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/main.rs
