use crate::domain::error::CheckoutError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const VALIDATION_FAILED: &str = "Error on validate schema.";
pub const INTERNAL_ERROR: &str = "Internal server error.";

/// Newtype over the domain error so it can be turned into an axum response.
pub struct ApiError(pub CheckoutError);

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        Self(err)
    }
}

// Status codes are decided here and nowhere else. Causes go to the log,
// never into the body.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            CheckoutError::Validation(msg) => {
                tracing::debug!(reason = %msg, "validation failed");
                (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({ "error": VALIDATION_FAILED })),
                )
                    .into_response()
            }
            CheckoutError::CartNotFound(_) => StatusCode::NOT_FOUND.into_response(),
            CheckoutError::Database(err) => {
                tracing::error!("database error: {err}");
                internal_error()
            }
            CheckoutError::StorageTimeout(after) => {
                tracing::error!(?after, "cart storage timed out");
                internal_error()
            }
            CheckoutError::Gateway(msg) => {
                tracing::error!("payment gateway error: {msg}");
                internal_error()
            }
            CheckoutError::GatewayTimeout(after) => {
                tracing::error!(?after, "payment gateway timed out");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": INTERNAL_ERROR })),
    )
        .into_response()
}
