//! JSON body extractor that runs `validator` rules before the handler.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use common::AppError;

/// Deserialized and validated request body.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::validation(first_message(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

/// First field message, sorted by field name so the result is stable.
fn first_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(_, errors)| errors.iter())
        .find_map(|error| error.message.as_ref().map(|msg| msg.to_string()))
        .unwrap_or_else(|| "Validation failed".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(email(message = "Invalid email format"))]
        email: String,
    }

    fn request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_valid_payload() {
        let ValidatedJson(payload) =
            ValidatedJson::<Payload>::from_request(request(r#"{"email":"a@x.com"}"#), &())
                .await
                .unwrap();
        assert_eq!(payload.email, "a@x.com");
    }

    #[tokio::test]
    async fn reports_rule_message() {
        let err = ValidatedJson::<Payload>::from_request(request(r#"{"email":"nope"}"#), &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Invalid email format"));
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let err = ValidatedJson::<Payload>::from_request(request("{"), &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
