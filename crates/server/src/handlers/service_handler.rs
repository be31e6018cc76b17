//! Service catalog handlers.

use axum::{
    extract::{Extension, Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use common::AppResult;
use domain::{NewService, Service, UpdateService};

use crate::extractors::ValidatedJson;
use crate::middleware::{require_owner, CurrentUser};
use crate::repository::UpdateOutcome;
use crate::state::AppState;

/// Email filter for owner-gated listings
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    /// Must equal the email in the token cookie
    pub email: Option<String>,
}

/// Service creation request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateServiceRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "vendor@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Wash")]
    pub name: String,
    pub url: Option<String>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
    pub description: Option<String>,
    pub area: Option<String>,
}

impl From<CreateServiceRequest> for NewService {
    fn from(req: CreateServiceRequest) -> Self {
        Self {
            email: req.email,
            name: req.name,
            url: req.url,
            price: req.price,
            description: req.description,
            area: req.area,
        }
    }
}

/// Partial update; omitted fields keep their stored value
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateServiceRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    pub url: Option<String>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
    pub description: Option<String>,
    pub area: Option<String>,
}

impl From<UpdateServiceRequest> for UpdateService {
    fn from(req: UpdateServiceRequest) -> Self {
        Self {
            email: req.email,
            name: req.name,
            url: req.url,
            price: req.price,
            description: req.description,
            area: req.area,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub acknowledged: bool,
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub inserted_id: String,
}

impl InsertResponse {
    pub fn new(inserted_id: String) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateServiceResponse {
    pub success: bool,
    pub message: String,
    pub result: UpdateOutcome,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Public catalog routes
pub fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/services", get(list_services).post(create_service))
        .route(
            "/services/:id",
            get(get_service).put(update_service).delete(delete_service),
        )
        .route("/featureservices", get(featured_services))
}

/// Routes that require the token cookie
pub fn owner_service_routes() -> Router<AppState> {
    Router::new()
        .route("/myservices", get(my_services))
        .route("/sservices", get(check_services_access))
}

/// List all services
#[utoipa::path(
    get,
    path = "/services",
    tag = "Services",
    responses(
        (status = 200, description = "All services", body = Vec<Service>)
    )
)]
pub async fn list_services(State(state): State<AppState>) -> AppResult<Json<Vec<Service>>> {
    Ok(Json(state.catalog_service.list_services().await?))
}

/// Featured services (at most six)
#[utoipa::path(
    get,
    path = "/featureservices",
    tag = "Services",
    responses(
        (status = 200, description = "Up to six services", body = Vec<Service>)
    )
)]
pub async fn featured_services(State(state): State<AppState>) -> AppResult<Json<Vec<Service>>> {
    Ok(Json(state.catalog_service.featured_services().await?))
}

/// Get service by ID
#[utoipa::path(
    get,
    path = "/services/{id}",
    tag = "Services",
    params(
        ("id" = String, Path, description = "Service ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Service", body = Service),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Service not found")
    )
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Service>> {
    Ok(Json(state.catalog_service.get_service(&id).await?))
}

/// Create a service
#[utoipa::path(
    post,
    path = "/services",
    tag = "Services",
    request_body = CreateServiceRequest,
    responses(
        (status = 200, description = "Service created", body = InsertResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_service(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateServiceRequest>,
) -> AppResult<Json<InsertResponse>> {
    let id = state.catalog_service.create_service(payload.into()).await?;
    Ok(Json(InsertResponse::new(id)))
}

/// Update a service with the provided fields
#[utoipa::path(
    put,
    path = "/services/{id}",
    tag = "Services",
    params(
        ("id" = String, Path, description = "Service ID (24 hex characters)")
    ),
    request_body = UpdateServiceRequest,
    responses(
        (status = 200, description = "Service updated", body = UpdateServiceResponse),
        (status = 400, description = "Validation error or malformed ID"),
        (status = 404, description = "Service not found")
    )
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateServiceRequest>,
) -> AppResult<Json<UpdateServiceResponse>> {
    let result = state
        .catalog_service
        .update_service(&id, payload.into())
        .await?;

    Ok(Json(UpdateServiceResponse {
        success: true,
        message: "Service updated successfully".to_string(),
        result,
    }))
}

/// Delete a service
#[utoipa::path(
    delete,
    path = "/services/{id}",
    tag = "Services",
    params(
        ("id" = String, Path, description = "Service ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Delete acknowledged", body = DeleteResponse),
        (status = 400, description = "Malformed ID")
    )
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let deleted_count = state.catalog_service.delete_service(&id).await?;
    Ok(Json(DeleteResponse {
        acknowledged: true,
        deleted_count,
    }))
}

/// Services owned by the caller
#[utoipa::path(
    get,
    path = "/myservices",
    tag = "Services",
    security(("cookie_auth" = [])),
    params(EmailQuery),
    responses(
        (status = 200, description = "Caller's services", body = Vec<Service>),
        (status = 401, description = "Missing token cookie"),
        (status = 403, description = "Invalid token or email mismatch")
    )
)]
pub async fn my_services(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> AppResult<Json<Vec<Service>>> {
    require_owner(&current_user, query.email.as_deref())?;
    Ok(Json(
        state
            .catalog_service
            .services_by_owner(&current_user.email)
            .await?,
    ))
}

/// Access check for the services dashboard
#[utoipa::path(
    get,
    path = "/sservices",
    tag = "Services",
    security(("cookie_auth" = [])),
    params(EmailQuery),
    responses(
        (status = 200, description = "Access granted", body = MessageResponse),
        (status = 401, description = "Missing token cookie"),
        (status = 403, description = "Invalid token or email mismatch")
    )
)]
pub async fn check_services_access(
    Extension(current_user): Extension<CurrentUser>,
    Query(query): Query<EmailQuery>,
) -> AppResult<Json<MessageResponse>> {
    require_owner(&current_user, query.email.as_deref())?;
    Ok(Json(MessageResponse {
        message: "Services Alright".to_string(),
    }))
}
