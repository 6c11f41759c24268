use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use shared::utils::{validation_details, validation_messages};
use tracing::debug;
use validator::Validate;

/// JSON body extractor that runs `validator` rules before the handler.
///
/// Every rejection is a 400 with `{ error, message, details }`, including
/// bodies axum itself would answer with 415 or 422.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(json_value) =
            axum::Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    debug!("Rejected request body: {}", rejection.body_text());
                    let payload = json!({
                        "error": "Invalid JSON",
                        "message": rejection.body_text(),
                        "details": Value::Null,
                    });
                    (StatusCode::BAD_REQUEST, axum::Json(payload))
                })?;

        json_value.validate().map_err(|validation_errors| {
            let messages = validation_messages(&validation_errors);
            let payload = json!({
                "error": "Validation failed",
                "message": if messages.is_empty() {
                    "Validation failed".to_string()
                } else {
                    messages.join("; ")
                },
                "details": validation_details(&validation_errors),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload))
        })?;

        Ok(Self(json_value))
    }
}
