use crate::bee_actor::BeeError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Failures a handler can report.
///
/// Malformed bodies and non-numeric ids never get this far; axum's extractors
/// reject them with their own 4xx responses.
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("Bee not found: {0}")]
    NotFound(i32),
    #[error("Bee store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<BeeError> for ApiError {
    fn from(e: BeeError) -> Self {
        match e {
            BeeError::NotFound(id) => ApiError::NotFound(id),
            BeeError::ActorCommunicationError(msg) => ApiError::StoreUnavailable(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // No body, matching a bare 404.
            ApiError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            ApiError::StoreUnavailable(msg) => {
                error!(error = %msg, "Store request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
