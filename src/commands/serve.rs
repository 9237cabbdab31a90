//! Serve command - Starts the HTTP server.

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::{Config, APP_TITLE};
use crate::errors::{AppError, AppResult};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting {}...", APP_TITLE);

    // Stores live as long as the state; nothing survives a restart.
    let app_state = AppState::in_memory();

    // Build router
    let app = create_router(app_state);

    // Start server
    let addr = bind_addr(&args, &config);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Server stopped");
    Ok(())
}

/// CLI flags win over configuration
fn bind_addr(args: &ServeArgs, config: &Config) -> String {
    Config {
        server_host: args.host.clone().unwrap_or_else(|| config.server_host.clone()),
        server_port: args.port.unwrap_or(config.server_port),
    }
    .server_addr()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Keep serving without a shutdown trigger.
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal, stopping server...");
}
