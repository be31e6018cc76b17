//! Booking domain entity, status and enrichment types.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::{STATUS_COMPLETED, STATUS_PENDING, STATUS_WORKING, UNKNOWN_SERVICE_NAME};
use crate::error::DomainError;
use crate::service::ServiceSummary;

/// Booking status enumeration.
///
/// Any status may follow any other; there is no transition table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Working,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => STATUS_PENDING,
            BookingStatus::Working => STATUS_WORKING,
            BookingStatus::Completed => STATUS_COMPLETED,
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PENDING => Ok(BookingStatus::Pending),
            STATUS_WORKING => Ok(BookingStatus::Working),
            STATUS_COMPLETED => Ok(BookingStatus::Completed),
            _ => Err(DomainError::InvalidStatus),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A booking made by a customer for a vendor's service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Document identifier (hex)
    #[serde(rename = "_id")]
    pub id: String,
    /// Referenced service id; not enforced to exist
    pub service_id: String,
    /// Customer email address
    pub user_email: String,
    #[serde(default)]
    pub user_name: Option<String>,
    /// Provider (vendor) email address
    pub provider_email: String,
    #[serde(default)]
    pub service_date: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub status: BookingStatus,
}

impl Booking {
    /// Build a stored booking from its generated id and creation data
    pub fn new(id: String, new: NewBooking) -> Self {
        Self {
            id,
            service_id: new.service_id,
            user_email: new.user_email,
            user_name: new.user_name,
            provider_email: new.provider_email,
            service_date: new.service_date,
            instructions: new.instructions,
            price: new.price,
            status: new.status,
        }
    }
}

/// Booking creation data
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub service_id: String,
    pub user_email: String,
    pub user_name: Option<String>,
    pub provider_email: String,
    pub service_date: Option<String>,
    pub instructions: Option<String>,
    pub price: Option<f64>,
    pub status: BookingStatus,
}

/// Booking with display fields copied from its referenced service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EnrichedBooking {
    #[serde(flatten)]
    pub booking: Booking,
    #[serde(rename = "serviceName")]
    pub service_name: String,
    #[serde(rename = "servicePhotoURL")]
    pub service_photo_url: Option<String>,
}

impl EnrichedBooking {
    /// Merge a looked-up service summary; `None` means the lookup found nothing.
    pub fn new(booking: Booking, summary: Option<ServiceSummary>) -> Self {
        let summary = summary.unwrap_or_default();
        Self {
            booking,
            service_name: summary
                .name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNKNOWN_SERVICE_NAME.to_string()),
            service_photo_url: summary.url.filter(|url| !url.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking() -> Booking {
        Booking::new(
            "65a000000000000000000001".to_string(),
            NewBooking {
                service_id: "65a000000000000000000002".to_string(),
                user_email: "c@x.com".to_string(),
                user_name: None,
                provider_email: "p@x.com".to_string(),
                service_date: Some("2024-05-01".to_string()),
                instructions: None,
                price: None,
                status: BookingStatus::default(),
            },
        )
    }

    #[test]
    fn parses_only_enumerated_statuses() {
        assert_eq!("pending".parse::<BookingStatus>(), Ok(BookingStatus::Pending));
        assert_eq!("working".parse::<BookingStatus>(), Ok(BookingStatus::Working));
        assert_eq!("completed".parse::<BookingStatus>(), Ok(BookingStatus::Completed));
        assert_eq!("done".parse::<BookingStatus>(), Err(DomainError::InvalidStatus));
        assert_eq!(BookingStatus::Working.to_string(), "working");
    }

    #[test]
    fn missing_summary_falls_back_to_placeholders() {
        let enriched = EnrichedBooking::new(booking(), None);
        assert_eq!(enriched.service_name, "Unknown Service");
        assert_eq!(enriched.service_photo_url, None);

        let json = serde_json::to_value(&enriched).unwrap();
        assert_eq!(json["serviceName"], "Unknown Service");
        assert!(json["servicePhotoURL"].is_null());
        assert_eq!(json["userEmail"], "c@x.com");
        assert_eq!(json["status"], "pending");
    }

    #[test]
    fn summary_fields_are_merged() {
        let summary = ServiceSummary {
            name: Some("Wash".to_string()),
            url: Some("https://img.example/wash.png".to_string()),
        };
        let enriched = EnrichedBooking::new(booking(), Some(summary));
        assert_eq!(enriched.service_name, "Wash");
        assert_eq!(
            enriched.service_photo_url.as_deref(),
            Some("https://img.example/wash.png")
        );
    }
}
