use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::types::ErrorResponse;
use crate::store::StoreError;

/// Boundary error taxonomy. Every failure leaving the API is translated
/// into exactly one of these kinds before it reaches the caller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// One or more of the five required inputs is absent. Client error,
    /// never retried.
    #[error("missing input parameters: {}", .0.join(", "))]
    MissingParameters(Vec<&'static str>),
    /// Persistence was not configured at startup. Expected and non-fatal;
    /// callers branch on this to disable history.
    #[error("simulation store is not configured")]
    StoreUnavailable,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable => Self::StoreUnavailable,
            StoreError::Backend(e) => Self::Internal(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingParameters(fields) => (
                StatusCode::BAD_REQUEST,
                format!("missing input parameters: {}", fields.join(", ")),
            ),
            Self::StoreUnavailable => (
                StatusCode::NOT_IMPLEMENTED,
                "simulation store is not configured".to_string(),
            ),
            Self::Internal(err) => {
                // Log the detail; the response body stays generic.
                tracing::error!(error = %err, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
