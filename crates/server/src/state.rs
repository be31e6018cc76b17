//! Application state for dependency injection.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::infra::Database;
use crate::repository::Repos;
use crate::service::{
    AuthService, Authenticator, BookingManager, BookingService, Catalog, CatalogService, Enricher,
};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub catalog_service: Arc<dyn CatalogService>,
    pub booking_service: Arc<dyn BookingService>,
    /// Present only when backed by MongoDB
    pub database: Option<Arc<Database>>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire services over the given repositories.
    pub fn from_repos(repos: Repos, config: ServerConfig) -> Self {
        let enricher = Enricher::new(repos.services.clone());

        Self {
            auth_service: Arc::new(Authenticator::from_config(&config.jwt)),
            catalog_service: Arc::new(Catalog::new(repos.services)),
            booking_service: Arc::new(BookingManager::new(repos.bookings, enricher)),
            database: repos.database,
            config: Arc::new(config),
        }
    }
}
