//! Service domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A service offered by a vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Service {
    /// Document identifier (hex)
    #[serde(rename = "_id")]
    pub id: String,
    /// Owner (vendor) email address
    pub email: String,
    /// Display name
    pub name: String,
    /// Photo URL
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    /// Area where the service is offered
    #[serde(default)]
    pub area: Option<String>,
}

impl Service {
    /// Build a stored service from its generated id and creation data
    pub fn new(id: String, new: NewService) -> Self {
        Self {
            id,
            email: new.email,
            name: new.name,
            url: new.url,
            price: new.price,
            description: new.description,
            area: new.area,
        }
    }

    /// Check whether the given email owns this service
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.email == email
    }

    /// Display fields used when enriching bookings
    pub fn summary(&self) -> ServiceSummary {
        ServiceSummary {
            name: Some(self.name.clone()),
            url: self.url.clone(),
        }
    }
}

/// Service creation data
#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub email: String,
    pub name: String,
    pub url: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub area: Option<String>,
}

/// Partial service update; only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateService {
    pub email: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub area: Option<String>,
}

impl UpdateService {
    /// True when no field would be changed
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.name.is_none()
            && self.url.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.area.is_none()
    }

    /// Reject an update that would not touch any field
    pub fn ensure_not_empty(&self) -> DomainResult<()> {
        if self.is_empty() {
            Err(DomainError::validation("No fields to update"))
        } else {
            Ok(())
        }
    }

    /// Merge the provided fields into `service`.
    ///
    /// Returns `true` if any stored value changed.
    pub fn apply_to(&self, service: &mut Service) -> bool {
        let before = service.clone();

        if let Some(email) = &self.email {
            service.email = email.clone();
        }
        if let Some(name) = &self.name {
            service.name = name.clone();
        }
        if let Some(url) = &self.url {
            service.url = Some(url.clone());
        }
        if let Some(price) = self.price {
            service.price = Some(price);
        }
        if let Some(description) = &self.description {
            service.description = Some(description.clone());
        }
        if let Some(area) = &self.area {
            service.area = Some(area.clone());
        }

        *service != before
    }
}

/// Display projection of a service (name and photo only)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceSummary {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wash() -> Service {
        Service::new(
            "507f1f77bcf86cd799439011".to_string(),
            NewService {
                email: "a@x.com".to_string(),
                name: "Wash".to_string(),
                url: None,
                price: Some(20.0),
                description: None,
                area: None,
            },
        )
    }

    #[test]
    fn partial_update_only_touches_provided_fields() {
        let mut service = wash();
        let update = UpdateService {
            name: Some("Deluxe Wash".to_string()),
            ..Default::default()
        };

        assert!(update.apply_to(&mut service));
        assert_eq!(service.name, "Deluxe Wash");
        assert_eq!(service.email, "a@x.com");
        assert_eq!(service.price, Some(20.0));
    }

    #[test]
    fn update_with_same_values_reports_no_change() {
        let mut service = wash();
        let update = UpdateService {
            price: Some(20.0),
            ..Default::default()
        };

        assert!(!update.apply_to(&mut service));
        assert!(UpdateService::default().is_empty());
        assert!(!update.is_empty());
    }

    #[test]
    fn serializes_id_as_underscore_id() {
        let json = serde_json::to_value(wash()).unwrap();
        assert_eq!(json["_id"], "507f1f77bcf86cd799439011");
        assert_eq!(json["email"], "a@x.com");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn empty_update_is_a_validation_error() {
        assert_eq!(
            UpdateService::default().ensure_not_empty(),
            Err(DomainError::Validation("No fields to update".to_string()))
        );

        let changes = UpdateService {
            area: Some("East".to_string()),
            ..Default::default()
        };
        assert_eq!(changes.ensure_not_empty(), Ok(()));
    }
}
