//! Token cookie handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use common::{AppResult, CookieConfig};
use domain::AUTH_COOKIE_NAME;

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Identity to sign into the cookie
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TokenRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Create token routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/jwt", post(issue_token))
        .route("/logout", post(logout))
}

/// Cookie attributes depend on deployment mode: cross-site in production,
/// strict same-site otherwise.
fn token_cookie(value: String, config: &CookieConfig) -> Cookie<'static> {
    let same_site = if config.production {
        SameSite::None
    } else {
        SameSite::Strict
    };

    Cookie::build((AUTH_COOKIE_NAME, value))
        .path("/")
        .http_only(true)
        .secure(config.production)
        .same_site(same_site)
        .build()
}

/// Sign a token and set it as an HttpOnly cookie
#[utoipa::path(
    post,
    path = "/jwt",
    tag = "Authentication",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Cookie set", body = SuccessResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn issue_token(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<TokenRequest>,
) -> AppResult<(CookieJar, Json<SuccessResponse>)> {
    let issued = state.auth_service.issue_token(&payload.email)?;
    tracing::info!(email = %payload.email, expires_in = issued.expires_in, "Token issued");

    let jar = jar.add(token_cookie(issued.token, &state.config.cookie));
    Ok((jar, Json(SuccessResponse { success: true })))
}

/// Clear the token cookie
#[utoipa::path(
    post,
    path = "/logout",
    tag = "Authentication",
    responses(
        (status = 200, description = "Cookie cleared", body = SuccessResponse)
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<SuccessResponse>) {
    let jar = jar.remove(token_cookie(String::new(), &state.config.cookie));
    (jar, Json(SuccessResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_cookie_is_strict_and_insecure() {
        let cookie = token_cookie("abc".to_string(), &CookieConfig { production: false });
        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn production_cookie_is_cross_site() {
        let cookie = token_cookie("abc".to_string(), &CookieConfig { production: true });
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
    }
}
