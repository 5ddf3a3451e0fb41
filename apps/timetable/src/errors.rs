use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::render::RenderError;
use crate::routine::RoutineError;
use crate::storage::StorageError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Routine(#[from] RoutineError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Rendering did not finish within {0}s")]
    RenderTimeout(u64),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Report storage is not configured")]
    StorageUnavailable,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Routine(e @ RoutineError::InvalidSkinType(_)) => {
                (StatusCode::BAD_REQUEST, "INVALID_SKIN_TYPE", e.to_string())
            }
            AppError::Render(e) => {
                tracing::error!("Render error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    "The timetable could not be rendered".to_string(),
                )
            }
            AppError::RenderTimeout(secs) => {
                tracing::error!("Render timed out after {secs}s");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "RENDER_TIMEOUT",
                    "Rendering the timetable took too long".to_string(),
                )
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "STORAGE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
            AppError::StorageUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "STORAGE_UNAVAILABLE",
                "Report delivery is not enabled on this server".to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
