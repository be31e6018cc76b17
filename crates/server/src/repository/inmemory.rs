//! In-memory repositories for development and tests.
//!
//! Documents are kept in insertion order, mirroring natural storage order.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use common::AppResult;
use domain::{Booking, BookingStatus, NewBooking, NewService, Service, ServiceSummary, UpdateService};

use super::{BookingRepository, ServiceRepository, UpdateOutcome};

fn generate_id() -> String {
    ObjectId::new().to_hex()
}

#[derive(Default)]
pub struct InMemoryServiceRepo {
    services: RwLock<Vec<Service>>,
}

impl InMemoryServiceRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ServiceRepository for InMemoryServiceRepo {
    async fn list(&self, limit: Option<i64>) -> AppResult<Vec<Service>> {
        let services = self.services.read().await;
        let limit = limit
            .and_then(|l| usize::try_from(l).ok())
            .unwrap_or(usize::MAX);
        Ok(services.iter().take(limit).cloned().collect())
    }

    async fn list_by_owner(&self, email: &str) -> AppResult<Vec<Service>> {
        let services = self.services.read().await;
        Ok(services
            .iter()
            .filter(|s| s.is_owned_by(email))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Service>> {
        let services = self.services.read().await;
        Ok(services.iter().find(|s| s.id == id).cloned())
    }

    async fn find_summary(&self, id: &str) -> AppResult<Option<ServiceSummary>> {
        let services = self.services.read().await;
        Ok(services.iter().find(|s| s.id == id).map(Service::summary))
    }

    async fn create(&self, service: NewService) -> AppResult<String> {
        let id = generate_id();
        self.services
            .write()
            .await
            .push(Service::new(id.clone(), service));
        Ok(id)
    }

    async fn update(&self, id: &str, changes: UpdateService) -> AppResult<UpdateOutcome> {
        let mut services = self.services.write().await;
        let outcome = match services.iter_mut().find(|s| s.id == id) {
            Some(service) => UpdateOutcome {
                matched_count: 1,
                modified_count: u64::from(changes.apply_to(service)),
            },
            None => UpdateOutcome::default(),
        };
        Ok(outcome)
    }

    async fn delete(&self, id: &str) -> AppResult<u64> {
        let mut services = self.services.write().await;
        let before = services.len();
        services.retain(|s| s.id != id);
        Ok((before - services.len()) as u64)
    }
}

#[derive(Default)]
pub struct InMemoryBookingRepo {
    bookings: RwLock<Vec<Booking>>,
}

impl InMemoryBookingRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepo {
    async fn create(&self, booking: NewBooking) -> AppResult<String> {
        let id = generate_id();
        self.bookings
            .write()
            .await
            .push(Booking::new(id.clone(), booking));
        Ok(id)
    }

    async fn list_by_customer(&self, email: &str) -> AppResult<Vec<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .iter()
            .filter(|b| b.user_email == email)
            .cloned()
            .collect())
    }

    async fn list_by_provider(&self, email: &str) -> AppResult<Vec<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .iter()
            .filter(|b| b.provider_email == email)
            .cloned()
            .collect())
    }

    async fn update_status(&self, id: &str, status: BookingStatus) -> AppResult<UpdateOutcome> {
        let mut bookings = self.bookings.write().await;
        let outcome = match bookings.iter_mut().find(|b| b.id == id) {
            Some(booking) => {
                let modified = booking.status != status;
                booking.status = status;
                UpdateOutcome {
                    matched_count: 1,
                    modified_count: u64::from(modified),
                }
            }
            None => UpdateOutcome::default(),
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_service(name: &str, email: &str) -> NewService {
        NewService {
            email: email.to_string(),
            name: name.to_string(),
            url: None,
            price: None,
            description: None,
            area: None,
        }
    }

    #[tokio::test]
    async fn list_respects_limit_and_insertion_order() {
        let repo = InMemoryServiceRepo::new();
        for i in 0..8 {
            repo.create(new_service(&format!("svc-{}", i), "a@x.com"))
                .await
                .unwrap();
        }

        let featured = repo.list(Some(6)).await.unwrap();
        assert_eq!(featured.len(), 6);
        assert_eq!(featured[0].name, "svc-0");
        assert_eq!(featured[5].name, "svc-5");
        assert_eq!(repo.list(None).await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn update_of_missing_service_matches_nothing() {
        let repo = InMemoryServiceRepo::new();
        let outcome = repo
            .update(&generate_id(), UpdateService::default())
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::default());
    }

    #[tokio::test]
    async fn delete_removes_only_the_target() {
        let repo = InMemoryServiceRepo::new();
        let keep = repo.create(new_service("Keep", "a@x.com")).await.unwrap();
        let gone = repo.create(new_service("Gone", "a@x.com")).await.unwrap();

        assert_eq!(repo.delete(&gone).await.unwrap(), 1);
        assert_eq!(repo.delete(&gone).await.unwrap(), 0);
        assert!(repo.find_by_id(&keep).await.unwrap().is_some());
        assert!(repo.find_by_id(&gone).await.unwrap().is_none());
    }
}
