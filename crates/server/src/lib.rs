//! Services booking API.
//!
//! HTTP REST API over the services catalog and customer bookings, with
//! cookie-carried JWT identity for owner-gated listings.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod infra;
pub mod middleware;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::config::ServerConfig;
use crate::infra::Database;
use crate::repository::Repos;
use crate::routes::create_router;
use crate::state::AppState;

/// Connect the storage backend and serve until the process is stopped.
pub async fn run_server(
    config: ServerConfig,
    in_memory: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let repos = if in_memory {
        info!("Using in-memory repositories");
        Repos::create_inmemory()
    } else {
        let database = Database::connect(&config.database).await?;
        Repos::create_mongodb(Arc::new(database))
    };

    let addr: SocketAddr = config.bind_address().parse()?;
    let app = create_router(AppState::from_repos(repos, config));

    info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
