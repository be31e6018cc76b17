//! HTTP request handlers.

pub mod auth_handler;
pub mod booking_handler;
pub mod health_handler;
pub mod service_handler;

pub use auth_handler::auth_routes;
pub use booking_handler::{booking_routes, owner_booking_routes};
pub use health_handler::health_routes;
pub use service_handler::{owner_service_routes, service_routes};
