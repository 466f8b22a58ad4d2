//! CRT Database Server
//!
//! REST API server for the CRT display catalog.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crtdb_server::{
    api,
    config::{AppConfig, StorageConfig},
    repository::Repository,
    services::{uploads, Services},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("crtdb_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CRT Database Server v{}", env!("CARGO_PKG_VERSION"));

    // Make sure the data files and the upload directory exist
    ensure_storage(&config.storage).await?;

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(&config.storage);
    let services = Services::new(repository, &config);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = api::create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create an empty catalog file when missing and make sure the upload
/// directory is there. The manufacturers file is reference data shipped
/// with the deployment; a missing one still gets an empty array so reads
/// do not 500.
async fn ensure_storage(storage: &StorageConfig) -> anyhow::Result<()> {
    for file in [&storage.crts_file, &storage.manufacturers_file] {
        let path = Path::new(file);
        if !path.exists() {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, b"[]").await?;
            tracing::warn!("Data file {} was missing, created an empty catalog", file);
        }
    }
    tokio::fs::create_dir_all(Path::new(&storage.upload_dir).join(uploads::CRTS_SUBDIR)).await?;
    Ok(())
}
