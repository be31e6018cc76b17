//! Booking enrichment with display fields of the referenced service.

use std::sync::Arc;

use futures::future::join_all;

use domain::{is_valid_id, Booking, EnrichedBooking};

use crate::repository::ServiceRepository;

/// Copies `serviceName` / `servicePhotoURL` into bookings at read time.
///
/// Lookups for a batch run concurrently. A lookup that fails degrades only
/// its own booking to the placeholder values.
#[derive(Clone)]
pub struct Enricher {
    services: Arc<dyn ServiceRepository>,
}

impl Enricher {
    pub fn new(services: Arc<dyn ServiceRepository>) -> Self {
        Self { services }
    }

    /// Enrich every booking, preserving input order.
    pub async fn enrich(&self, bookings: Vec<Booking>) -> Vec<EnrichedBooking> {
        join_all(bookings.into_iter().map(|booking| self.enrich_one(booking))).await
    }

    async fn enrich_one(&self, booking: Booking) -> EnrichedBooking {
        if !is_valid_id(&booking.service_id) {
            return EnrichedBooking::new(booking, None);
        }

        let summary = match self.services.find_summary(&booking.service_id).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!(
                    booking_id = %booking.id,
                    service_id = %booking.service_id,
                    error = %e,
                    "Service lookup failed, using placeholder"
                );
                None
            }
        };

        EnrichedBooking::new(booking, summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockServiceRepository;
    use common::AppError;
    use domain::{BookingStatus, NewBooking, ServiceSummary, UNKNOWN_SERVICE_NAME};

    const KNOWN: &str = "65a000000000000000000001";
    const MISSING: &str = "65a000000000000000000002";
    const BROKEN: &str = "65a000000000000000000003";

    fn booking(id: &str, service_id: &str) -> Booking {
        Booking::new(
            id.to_string(),
            NewBooking {
                service_id: service_id.to_string(),
                user_email: "c@x.com".to_string(),
                user_name: None,
                provider_email: "p@x.com".to_string(),
                service_date: None,
                instructions: None,
                price: None,
                status: BookingStatus::Pending,
            },
        )
    }

    fn repo() -> MockServiceRepository {
        let mut repo = MockServiceRepository::new();
        repo.expect_find_summary().returning(|id| match id {
            KNOWN => Ok(Some(ServiceSummary {
                name: Some("Wash".to_string()),
                url: Some("https://img.example/wash.png".to_string()),
            })),
            BROKEN => Err(AppError::internal("connection reset")),
            _ => Ok(None),
        });
        repo
    }

    #[tokio::test]
    async fn merges_known_and_defaults_missing() {
        let enricher = Enricher::new(Arc::new(repo()));
        let enriched = enricher
            .enrich(vec![booking("b1", KNOWN), booking("b2", MISSING)])
            .await;

        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].booking.id, "b1");
        assert_eq!(enriched[0].service_name, "Wash");
        assert_eq!(
            enriched[0].service_photo_url.as_deref(),
            Some("https://img.example/wash.png")
        );
        assert_eq!(enriched[1].service_name, UNKNOWN_SERVICE_NAME);
        assert_eq!(enriched[1].service_photo_url, None);
    }

    #[tokio::test]
    async fn failed_lookup_degrades_only_its_booking() {
        let enricher = Enricher::new(Arc::new(repo()));
        let enriched = enricher
            .enrich(vec![booking("b1", BROKEN), booking("b2", KNOWN)])
            .await;

        assert_eq!(enriched[0].service_name, UNKNOWN_SERVICE_NAME);
        assert_eq!(enriched[1].service_name, "Wash");
    }

    #[tokio::test]
    async fn malformed_reference_skips_lookup() {
        let mut repo = MockServiceRepository::new();
        repo.expect_find_summary().never();

        let enricher = Enricher::new(Arc::new(repo));
        let enriched = enricher.enrich(vec![booking("b1", "not-an-id")]).await;
        assert_eq!(enriched[0].service_name, UNKNOWN_SERVICE_NAME);
    }
}
