use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Failed to load startup artifact: {0}")]
    StartupLoad(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(ref e) => {
                tracing::debug!("Rejected prediction request: {}", e);
                (StatusCode::BAD_REQUEST, e.as_str())
            }
            AppError::StartupLoad(ref e) => {
                tracing::error!("Startup artifact error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Reference data unavailable")
            }
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({ "error": error_message }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
