//! Application error types.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use brightpath_core::activities::CatalogueError;
use brightpath_core::coaching::PoseError;
use brightpath_core::relay::RelayError;
use thiserror::Error;

use crate::models::ErrorResponse;

/// Body text for a relay request without a usable message.
pub const MISSING_MESSAGE: &str = "missing message";

/// Body text when every upstream candidate failed.
pub const NO_VALID_RESPONSE: &str = "No endpoint returned a valid response";

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream exhausted: {0}")]
    UpstreamExhausted(String),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, success, error) = match self {
            AppError::InvalidRequest(m) => (StatusCode::BAD_REQUEST, None, m),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, None, m),
            AppError::UpstreamExhausted(m) => (StatusCode::BAD_GATEWAY, Some(false), m),
            AppError::Internal(m) => {
                tracing::error!(error = %m, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    None,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorResponse { success, error })).into_response()
    }
}

impl From<RelayError> for AppError {
    fn from(e: RelayError) -> Self {
        match e {
            RelayError::InvalidRequest(_) => AppError::InvalidRequest(MISSING_MESSAGE.into()),
            RelayError::AllUpstreamsExhausted { .. } => {
                AppError::UpstreamExhausted(NO_VALID_RESPONSE.into())
            }
            RelayError::Config(msg) => AppError::Internal(msg),
        }
    }
}

impl From<CatalogueError> for AppError {
    fn from(e: CatalogueError) -> Self {
        match e {
            CatalogueError::UnknownActivity(_) => AppError::NotFound(e.to_string()),
            CatalogueError::UnknownCategory(_) => AppError::InvalidRequest(e.to_string()),
        }
    }
}

impl From<PoseError> for AppError {
    fn from(e: PoseError) -> Self {
        AppError::InvalidRequest(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::InvalidRequest(e.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::InvalidRequest(e.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(e: PathRejection) -> Self {
        AppError::InvalidRequest(e.body_text())
    }
}
