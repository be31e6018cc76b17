//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Services and bookings are shared between the repositories and the HTTP layer.

pub mod booking;
pub mod constants;
pub mod error;
pub mod service;

pub use booking::{Booking, BookingStatus, EnrichedBooking, NewBooking};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use service::{NewService, Service, ServiceSummary, UpdateService};
