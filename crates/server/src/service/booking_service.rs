//! Booking service - use cases over customer bookings.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{is_valid_id, BookingStatus, DomainError, EnrichedBooking, NewBooking};

use super::Enricher;
use crate::repository::{BookingRepository, UpdateOutcome};

/// Booking service trait for dependency injection.
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Create a booking and return its id
    async fn create_booking(&self, booking: NewBooking) -> AppResult<String>;

    /// Bookings placed by a customer, enriched with service display fields
    async fn bookings_for_customer(&self, email: &str) -> AppResult<Vec<EnrichedBooking>>;

    /// Bookings addressed to a provider, enriched with service display fields
    async fn bookings_for_provider(&self, email: &str) -> AppResult<Vec<EnrichedBooking>>;

    /// Validate and overwrite a booking's status
    async fn update_status(&self, id: &str, status: Option<String>) -> AppResult<UpdateOutcome>;
}

/// Concrete implementation of BookingService.
pub struct BookingManager {
    repo: Arc<dyn BookingRepository>,
    enricher: Enricher,
}

impl BookingManager {
    pub fn new(repo: Arc<dyn BookingRepository>, enricher: Enricher) -> Self {
        Self { repo, enricher }
    }
}

#[async_trait]
impl BookingService for BookingManager {
    async fn create_booking(&self, booking: NewBooking) -> AppResult<String> {
        let id = self.repo.create(booking).await?;
        tracing::info!(booking_id = %id, "Booking created");
        Ok(id)
    }

    async fn bookings_for_customer(&self, email: &str) -> AppResult<Vec<EnrichedBooking>> {
        let bookings = self.repo.list_by_customer(email).await?;
        Ok(self.enricher.enrich(bookings).await)
    }

    async fn bookings_for_provider(&self, email: &str) -> AppResult<Vec<EnrichedBooking>> {
        let bookings = self.repo.list_by_provider(email).await?;
        Ok(self.enricher.enrich(bookings).await)
    }

    async fn update_status(&self, id: &str, status: Option<String>) -> AppResult<UpdateOutcome> {
        if !is_valid_id(id) {
            return Err(DomainError::invalid_id("booking").into());
        }
        let status: BookingStatus = status.as_deref().unwrap_or_default().parse()?;

        let outcome = self.repo.update_status(id, status).await?;
        tracing::info!(booking_id = %id, %status, matched = outcome.matched_count, "Booking status updated");
        Ok(outcome)
    }
}
