//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed for a field or input
    #[error("{0}")]
    Validation(String),

    /// Identifier is not a well-formed document id
    #[error("Invalid {0} ID.")]
    InvalidId(String),

    /// Status value is not one of the enumerated values
    #[error("Invalid or missing status.")]
    InvalidStatus,

    /// Entity not found
    #[error("{0} not found")]
    NotFound(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create an invalid id error for the named entity
    pub fn invalid_id(entity: impl Into<String>) -> Self {
        DomainError::InvalidId(entity.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>) -> Self {
        DomainError::NotFound(entity.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
