//! Repositories over the `services` and `bookings` collections.
//!
//! Each operation maps to a single database query. Two backends exist:
//! MongoDB for deployments and an in-memory store for development and tests.

mod inmemory;
mod mongo;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use common::AppResult;
use domain::{Booking, BookingStatus, NewBooking, NewService, Service, ServiceSummary, UpdateService};

use crate::infra::Database;

pub use inmemory::{InMemoryBookingRepo, InMemoryServiceRepo};
pub use mongo::{MongoBookingRepo, MongoServiceRepo};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Outcome of a single-document update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Service repository trait for dependency injection.
///
/// Ids are hex strings already validated by the caller.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// List services in natural storage order, optionally bounded
    async fn list(&self, limit: Option<i64>) -> AppResult<Vec<Service>>;

    /// List services owned by the given email
    async fn list_by_owner(&self, email: &str) -> AppResult<Vec<Service>>;

    /// Find a service by id
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Service>>;

    /// Find only the display fields of a service
    async fn find_summary(&self, id: &str) -> AppResult<Option<ServiceSummary>>;

    /// Insert a service and return its generated id
    async fn create(&self, service: NewService) -> AppResult<String>;

    /// Merge the provided fields into the service
    async fn update(&self, id: &str, changes: UpdateService) -> AppResult<UpdateOutcome>;

    /// Delete a service, returning the number of removed documents
    async fn delete(&self, id: &str) -> AppResult<u64>;
}

/// Booking repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert a booking and return its generated id
    async fn create(&self, booking: NewBooking) -> AppResult<String>;

    /// List bookings placed by a customer
    async fn list_by_customer(&self, email: &str) -> AppResult<Vec<Booking>>;

    /// List bookings addressed to a provider
    async fn list_by_provider(&self, email: &str) -> AppResult<Vec<Booking>>;

    /// Overwrite the status of a booking
    async fn update_status(&self, id: &str, status: BookingStatus) -> AppResult<UpdateOutcome>;
}

/// Repository handles created once at startup and injected into the state.
#[derive(Clone)]
pub struct Repos {
    pub services: Arc<dyn ServiceRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    /// Present only for the MongoDB backend
    pub database: Option<Arc<Database>>,
}

impl Repos {
    /// Build MongoDB-backed repositories over an open connection.
    pub fn create_mongodb(database: Arc<Database>) -> Self {
        Self {
            services: Arc::new(MongoServiceRepo::new(&database)),
            bookings: Arc::new(MongoBookingRepo::new(&database)),
            database: Some(database),
        }
    }

    /// Build empty in-memory repositories.
    pub fn create_inmemory() -> Self {
        Self {
            services: Arc::new(InMemoryServiceRepo::new()),
            bookings: Arc::new(InMemoryBookingRepo::new()),
            database: None,
        }
    }
}
