//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and the repositories. They depend on
//! repository traits so handlers can be tested against the in-memory store.

mod auth_service;
mod booking_service;
mod catalog_service;
mod enrichment;

pub use auth_service::{AuthService, Authenticator, Claims, IssuedToken};
pub use booking_service::{BookingManager, BookingService};
pub use catalog_service::{Catalog, CatalogService};
pub use enrichment::Enricher;
