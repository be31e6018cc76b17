//! Token issuing and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use common::{AppResult, JwtConfig};
use domain::SECONDS_PER_HOUR;

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// Lifetime in seconds
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
pub trait AuthService: Send + Sync {
    /// Sign a time-limited token for the given identity
    fn issue_token(&self, email: &str) -> AppResult<IssuedToken>;

    /// Verify signature and expiry, returning the embedded claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// HS256 implementation of AuthService with a shared secret.
pub struct Authenticator {
    jwt_secret: String,
    jwt_expiration_hours: i64,
}

impl Authenticator {
    pub fn new(jwt_secret: String, jwt_expiration_hours: i64) -> Self {
        Self {
            jwt_secret,
            jwt_expiration_hours,
        }
    }

    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(config.secret.clone(), config.expiration_hours)
    }

    fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
}

impl AuthService for Authenticator {
    fn issue_token(&self, email: &str) -> AppResult<IssuedToken> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.jwt_expiration_hours);

        let claims = Claims {
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret_bytes()),
        )?;

        Ok(IssuedToken {
            token,
            expires_in: self.jwt_expiration_hours * SECONDS_PER_HOUR,
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        tracing::debug!(email = %token_data.claims.email, "Decoded token");
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;

    const SECRET: &str = "test-secret-key-for-testing-only-32chars";

    #[test]
    fn issued_token_verifies_with_same_secret() {
        let auth = Authenticator::new(SECRET.to_string(), 5);
        let issued = auth.issue_token("a@x.com").unwrap();

        let claims = auth.verify_token(&issued.token).unwrap();
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.exp - claims.iat, 5 * SECONDS_PER_HOUR);
        assert_eq!(issued.expires_in, 5 * SECONDS_PER_HOUR);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = Authenticator::new("another-secret-key-for-testing-32chars".to_string(), 5);
        let verifier = Authenticator::new(SECRET.to_string(), 5);
        let issued = issuer.issue_token("a@x.com").unwrap();

        let err = verifier.verify_token(&issued.token).unwrap_err();
        assert!(matches!(err, AppError::Jwt(_)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let auth = Authenticator::new(SECRET.to_string(), -2);
        let issued = auth.issue_token("a@x.com").unwrap();

        assert!(auth.verify_token(&issued.token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let auth = Authenticator::new(SECRET.to_string(), 5);
        assert!(auth.verify_token("not.a.token").is_err());
    }
}
