//! Error types for the amenity API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use works_tracker::WorkOrderError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Station not found: {0}")]
    StationNotFound(String),

    #[error("Work order not found: {0}")]
    WorkOrderNotFound(String),

    #[error("Project already exists: {0}")]
    DuplicateProject(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<WorkOrderError> for ApiError {
    fn from(e: WorkOrderError) -> Self {
        ApiError::InvalidRequest(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::StationNotFound(code) => (
                StatusCode::NOT_FOUND,
                format!("Station not found: {}", code),
            ),
            ApiError::WorkOrderNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Work order not found: {}", id),
            ),
            ApiError::DuplicateProject(id) => (
                StatusCode::CONFLICT,
                format!("Project already exists: {}", id),
            ),
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
