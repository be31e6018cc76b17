//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Booking Status
// =============================================================================

/// Booking accepted but not started
pub const STATUS_PENDING: &str = "pending";

/// Provider is working on the booking
pub const STATUS_WORKING: &str = "working";

/// Booking finished
pub const STATUS_COMPLETED: &str = "completed";

// =============================================================================
// Catalog
// =============================================================================

/// Maximum number of services returned by the featured listing
pub const FEATURED_SERVICES_LIMIT: i64 = 6;

/// Placeholder name when a booking references a missing service
pub const UNKNOWN_SERVICE_NAME: &str = "Unknown Service";

// =============================================================================
// Identifiers
// =============================================================================

/// Length of a hex-encoded document id
pub const DOCUMENT_ID_HEX_LENGTH: usize = 24;

/// Check if a string is a well-formed document id (24 hex characters)
pub fn is_valid_id(id: &str) -> bool {
    id.len() == DOCUMENT_ID_HEX_LENGTH && id.bytes().all(|b| b.is_ascii_hexdigit())
}

// =============================================================================
// Authentication
// =============================================================================

/// Default token lifetime in hours
pub const DEFAULT_TOKEN_EXPIRATION_HOURS: i64 = 5;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Name of the cookie carrying the access token
pub const AUTH_COOKIE_NAME: &str = "token";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_document_ids() {
        assert!(is_valid_id("507f1f77bcf86cd799439011"));
        assert!(is_valid_id("507F1F77BCF86CD799439011"));
        assert!(!is_valid_id("507f1f77bcf86cd79943901"));
        assert!(!is_valid_id("507f1f77bcf86cd79943901z"));
        assert!(!is_valid_id("not-an-id"));
    }
}
