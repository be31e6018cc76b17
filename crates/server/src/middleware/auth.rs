//! Authentication middleware.

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use axum_extra::extract::cookie::CookieJar;

use common::{AppError, AppResult};
use domain::AUTH_COOKIE_NAME;

use crate::state::AppState;

/// Identity decoded from the `token` cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub email: String,
}

/// Check that the caller is asking about their own records.
///
/// A missing `email` query parameter counts as a mismatch.
pub fn require_owner(user: &CurrentUser, email: Option<&str>) -> AppResult<()> {
    match email {
        Some(email) if email == user.email => Ok(()),
        _ => Err(AppError::Forbidden),
    }
}

/// Authentication middleware that validates the JWT carried in the cookie.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let jar = CookieJar::from_headers(request.headers());
    let token = jar
        .get(AUTH_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(AppError::Unauthorized)?;

    let claims = state.auth_service.verify_token(&token)?;

    request.extensions_mut().insert(CurrentUser {
        email: claims.email,
    });

    Ok(next.run(request).await)
}
