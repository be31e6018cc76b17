//! OpenAPI documentation.

use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};

use crate::handlers::auth_handler::{SuccessResponse, TokenRequest};
use crate::handlers::booking_handler::{
    CreateBookingRequest, UpdateStatusRequest, UpdateStatusResponse,
};
use crate::handlers::health_handler::{DatabaseHealth, HealthResponse};
use crate::handlers::service_handler::{
    CreateServiceRequest, DeleteResponse, InsertResponse, MessageResponse,
    UpdateServiceRequest, UpdateServiceResponse,
};
use crate::repository::UpdateOutcome;
use domain::{Booking, BookingStatus, EnrichedBooking, Service, AUTH_COOKIE_NAME};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth_handler::issue_token,
        crate::handlers::auth_handler::logout,
        crate::handlers::health_handler::health_check,
        crate::handlers::service_handler::list_services,
        crate::handlers::service_handler::featured_services,
        crate::handlers::service_handler::get_service,
        crate::handlers::service_handler::create_service,
        crate::handlers::service_handler::update_service,
        crate::handlers::service_handler::delete_service,
        crate::handlers::service_handler::my_services,
        crate::handlers::service_handler::check_services_access,
        crate::handlers::booking_handler::create_booking,
        crate::handlers::booking_handler::customer_bookings,
        crate::handlers::booking_handler::provider_bookings,
        crate::handlers::booking_handler::update_booking_status,
    ),
    components(
        schemas(
            TokenRequest,
            SuccessResponse,
            HealthResponse,
            DatabaseHealth,
            Service,
            CreateServiceRequest,
            UpdateServiceRequest,
            InsertResponse,
            UpdateServiceResponse,
            UpdateOutcome,
            DeleteResponse,
            MessageResponse,
            Booking,
            BookingStatus,
            EnrichedBooking,
            CreateBookingRequest,
            UpdateStatusRequest,
            UpdateStatusResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Token cookie endpoints"),
        (name = "Health", description = "Liveness and database health"),
        (name = "Services", description = "Vendor service catalog"),
        (name = "Bookings", description = "Customer bookings"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(AUTH_COOKIE_NAME))),
            );
        }
    }
}
