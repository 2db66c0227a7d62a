/// Server setup and initialization
///
/// Wires together the storage layer and HTTP routes, and provides the main
/// application factory function for creating the Axum app.

use crate::{
    api::projects::{create_project_routes, AppState},
    config::Config,
    project::ProjectStore,
};
use anyhow::Result;
use axum::{routing::get, Router};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use std::path::Path;
use tokio::net::TcpListener;

/// Create the main Axum application with all routes
///
/// Opens the database pool, initializes the schema, and wires the project
/// routes together with the shared application state. The pool is built
/// here once and passed down; nothing below this function opens
/// connections on its own.
pub async fn create_app(config: Config) -> Result<Router> {
    // Ensure the directory holding the database file exists
    if let Some(parent) = Path::new(&config.database.db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!(
                    "Failed to create database directory '{}': {}",
                    parent.display(),
                    e
                )
            })?;
        }
    }

    tracing::info!("🗄️ Opening projects database: {}", config.database.db_path);
    let options = SqliteConnectOptions::new()
        .filename(&config.database.db_path)
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;

    tracing::info!("📋 Initializing projects schema");
    let store = ProjectStore::new(pool);
    store.init_schema().await?;

    let app_state = AppState { store };

    tracing::info!("📡 Creating HTTP router with all endpoints");
    let app = Router::new()
        // Health check endpoint
        .route("/healthz", get(health_check))
        // Project management API routes
        .merge(create_project_routes().with_state(app_state));

    tracing::info!("✅ Application initialized successfully");

    Ok(app)
}

/// Start the HTTP server with the given configuration
///
/// Creates the application and starts the Axum server on the configured
/// address and port.
pub async fn start_server(config: Config) -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();

    tracing::info!("Starting proyectos server...");

    // Create the application
    let app = create_app(config.clone()).await?;

    // Bind to the configured address
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server listening on http://{}", bind_addr);

    // Start the server
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
