//! Pool hub HTTP server binary.
//!
//! Builds the repository, sets up the HTTP router, and starts serving
//! requests.
//!
//! # Usage
//!
//! ```bash
//! # In-memory repository loaded from a seed file
//! POOL_HUB_SEED=backend/data/seed.json cargo run --bin pool-hub-server
//!
//! # Upstream REST API
//! REPOSITORY_TYPE=remote POOL_HUB_API_URL=https://hub.example.com \
//!   cargo run --bin pool-hub-server --features remote-repo
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)
//! - `REPOSITORY_TYPE`: `local` or `remote` (ignored when `repository.toml` is found)
//! - `POOL_HUB_SEED`: seed JSON for the local repository
//! - `POOL_HUB_API_URL`: upstream base URL for the remote repository

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use pool_hub::db::RepositoryFactory;
use pool_hub::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting pool hub server");

    let repository = RepositoryFactory::from_default_config_or_env()?;
    match pool_hub::db::services::health_check(repository.as_ref()).await {
        Ok(true) => info!("Repository initialized successfully"),
        Ok(false) => tracing::warn!("Repository reports unhealthy at startup"),
        Err(e) => tracing::warn!("Repository health check failed: {}", e),
    }

    let state = AppState::new(repository);
    let app = create_router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
