//! Catalog service - use cases over vendor services.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{is_valid_id, DomainError, NewService, Service, UpdateService, FEATURED_SERVICES_LIMIT};

use crate::repository::{ServiceRepository, UpdateOutcome};

/// Catalog service trait for dependency injection.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// All services in storage order
    async fn list_services(&self) -> AppResult<Vec<Service>>;

    /// At most six services for the landing page
    async fn featured_services(&self) -> AppResult<Vec<Service>>;

    /// Services owned by a vendor; the caller has already checked identity
    async fn services_by_owner(&self, email: &str) -> AppResult<Vec<Service>>;

    async fn get_service(&self, id: &str) -> AppResult<Service>;

    /// Create a service and return its id
    async fn create_service(&self, service: NewService) -> AppResult<String>;

    /// Partially update a service; fails with NotFound when nothing matched
    async fn update_service(&self, id: &str, changes: UpdateService) -> AppResult<UpdateOutcome>;

    /// Delete a service and return the number of removed documents
    async fn delete_service(&self, id: &str) -> AppResult<u64>;
}

/// Concrete implementation of CatalogService using a repository.
pub struct Catalog {
    repo: Arc<dyn ServiceRepository>,
}

impl Catalog {
    pub fn new(repo: Arc<dyn ServiceRepository>) -> Self {
        Self { repo }
    }
}

fn ensure_service_id(id: &str) -> AppResult<()> {
    if is_valid_id(id) {
        Ok(())
    } else {
        Err(DomainError::invalid_id("service").into())
    }
}

#[async_trait]
impl CatalogService for Catalog {
    async fn list_services(&self) -> AppResult<Vec<Service>> {
        self.repo.list(None).await
    }

    async fn featured_services(&self) -> AppResult<Vec<Service>> {
        self.repo.list(Some(FEATURED_SERVICES_LIMIT)).await
    }

    async fn services_by_owner(&self, email: &str) -> AppResult<Vec<Service>> {
        self.repo.list_by_owner(email).await
    }

    async fn get_service(&self, id: &str) -> AppResult<Service> {
        ensure_service_id(id)?;
        self.repo.find_by_id(id).await?.ok_or_not_found("Service")
    }

    async fn create_service(&self, service: NewService) -> AppResult<String> {
        let id = self.repo.create(service).await?;
        tracing::info!(service_id = %id, "Service created");
        Ok(id)
    }

    async fn update_service(&self, id: &str, changes: UpdateService) -> AppResult<UpdateOutcome> {
        ensure_service_id(id)?;
        changes.ensure_not_empty()?;

        let outcome = self.repo.update(id, changes).await?;
        if outcome.matched_count == 0 {
            return Err(AppError::not_found("Service"));
        }
        Ok(outcome)
    }

    async fn delete_service(&self, id: &str) -> AppResult<u64> {
        ensure_service_id(id)?;
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockServiceRepository;
    use mockall::predicate::eq;

    const ID: &str = "507f1f77bcf86cd799439011";

    #[tokio::test]
    async fn featured_services_requests_six() {
        let mut repo = MockServiceRepository::new();
        repo.expect_list()
            .with(eq(Some(6)))
            .times(1)
            .returning(|_| Ok(vec![]));

        let catalog = Catalog::new(Arc::new(repo));
        assert!(catalog.featured_services().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_id_never_reaches_repository() {
        let repo = MockServiceRepository::new();
        let catalog = Catalog::new(Arc::new(repo));

        let err = catalog.get_service("xyz").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        let err = catalog.delete_service("xyz").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn update_without_match_is_not_found() {
        let mut repo = MockServiceRepository::new();
        repo.expect_update()
            .returning(|_, _| Ok(UpdateOutcome::default()));

        let catalog = Catalog::new(Arc::new(repo));
        let changes = UpdateService {
            name: Some("New".to_string()),
            ..Default::default()
        };
        let err = catalog.update_service(ID, changes).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn empty_update_is_rejected() {
        let repo = MockServiceRepository::new();
        let catalog = Catalog::new(Arc::new(repo));

        let err = catalog
            .update_service(ID, UpdateService::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn missing_service_is_not_found() {
        let mut repo = MockServiceRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let catalog = Catalog::new(Arc::new(repo));
        let err = catalog.get_service(ID).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
