/// Proyectos API server
///
/// Main entry point. Initializes configuration and starts the HTTP server
/// serving the project CRUD endpoints.

use proyectos_api::{config::Config, server::start_server};

/// Application entry point
///
/// Initializes the server with default configuration and starts listening
/// for requests. The server provides:
/// - Project CRUD API at /proyectos
/// - Health check at /healthz
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (defaults to 0.0.0.0:3000 and a SQLite file under data/)
    let config = Config::default();

    // Start the server
    start_server(config).await?;

    Ok(())
}
