//! Booking handlers.

use axum::{
    extract::{Extension, Path, Query, State},
    response::Json,
    routing::{get, patch, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::{BookingStatus, EnrichedBooking, NewBooking};

use super::service_handler::{EmailQuery, InsertResponse};
use crate::extractors::ValidatedJson;
use crate::middleware::{require_owner, CurrentUser};
use crate::state::AppState;

/// Booking request placed by a customer
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[validate(length(min = 1, message = "Service ID is required"))]
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub service_id: String,
    #[validate(email(message = "Invalid customer email"))]
    pub user_email: String,
    pub user_name: Option<String>,
    #[validate(email(message = "Invalid provider email"))]
    pub provider_email: String,
    #[schema(example = "2024-05-01")]
    pub service_date: Option<String>,
    pub instructions: Option<String>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
    /// Defaults to `pending`
    pub status: Option<BookingStatus>,
}

impl From<CreateBookingRequest> for NewBooking {
    fn from(req: CreateBookingRequest) -> Self {
        Self {
            service_id: req.service_id,
            user_email: req.user_email,
            user_name: req.user_name,
            provider_email: req.provider_email,
            service_date: req.service_date,
            instructions: req.instructions,
            price: req.price,
            status: req.status.unwrap_or_default(),
        }
    }
}

/// Status change; checked against the allowed values by the service layer
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    #[schema(value_type = Option<String>, example = "working")]
    pub status: Option<Value>,
}

impl UpdateStatusRequest {
    /// Only a string can name a status; anything else counts as missing
    fn into_status(self) -> Option<String> {
        match self.status {
            Some(Value::String(status)) => Some(status),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusResponse {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Public booking routes
pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/book-services", post(create_booking))
        .route("/bookedservices/:id", patch(update_booking_status))
}

/// Routes that require the token cookie
pub fn owner_booking_routes() -> Router<AppState> {
    Router::new()
        .route("/bookedservices", get(customer_bookings))
        .route("/servicestodo", get(provider_bookings))
}

/// Book a service
#[utoipa::path(
    post,
    path = "/book-services",
    tag = "Bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 200, description = "Booking created", body = InsertResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBookingRequest>,
) -> AppResult<Json<InsertResponse>> {
    let id = state.booking_service.create_booking(payload.into()).await?;
    Ok(Json(InsertResponse::new(id)))
}

/// Bookings placed by the caller
#[utoipa::path(
    get,
    path = "/bookedservices",
    tag = "Bookings",
    security(("cookie_auth" = [])),
    params(EmailQuery),
    responses(
        (status = 200, description = "Caller's bookings", body = Vec<EnrichedBooking>),
        (status = 401, description = "Missing token cookie"),
        (status = 403, description = "Invalid token or email mismatch")
    )
)]
pub async fn customer_bookings(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> AppResult<Json<Vec<EnrichedBooking>>> {
    require_owner(&current_user, query.email.as_deref())?;
    Ok(Json(
        state
            .booking_service
            .bookings_for_customer(&current_user.email)
            .await?,
    ))
}

/// Bookings addressed to the caller as provider
#[utoipa::path(
    get,
    path = "/servicestodo",
    tag = "Bookings",
    security(("cookie_auth" = [])),
    params(EmailQuery),
    responses(
        (status = 200, description = "Bookings to fulfil", body = Vec<EnrichedBooking>),
        (status = 401, description = "Missing token cookie"),
        (status = 403, description = "Invalid token or email mismatch")
    )
)]
pub async fn provider_bookings(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> AppResult<Json<Vec<EnrichedBooking>>> {
    require_owner(&current_user, query.email.as_deref())?;
    Ok(Json(
        state
            .booking_service
            .bookings_for_provider(&current_user.email)
            .await?,
    ))
}

/// Change a booking's status
#[utoipa::path(
    patch,
    path = "/bookedservices/{id}",
    tag = "Bookings",
    params(
        ("id" = String, Path, description = "Booking ID (24 hex characters)")
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = UpdateStatusResponse),
        (status = 400, description = "Invalid booking ID or status")
    )
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Option<Json<UpdateStatusRequest>>,
) -> AppResult<Json<UpdateStatusResponse>> {
    // An unreadable body counts as a missing status
    let status = payload.and_then(|Json(body)| body.into_status());
    let outcome = state.booking_service.update_status(&id, status).await?;

    Ok(Json(UpdateStatusResponse {
        acknowledged: true,
        matched_count: outcome.matched_count,
        modified_count: outcome.modified_count,
    }))
}
