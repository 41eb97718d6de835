use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("No data at {0}")]
    MissingData(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::MissingData(path) => (StatusCode::NOT_FOUND, format!("No data at {}", path)),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::MalformedRecord(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::DataSource(e) => {
                error!("data source error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Data source unavailable".to_string(),
                )
            }
            other => {
                error!("internal error: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}

/// A single record that could not be normalized. Reported alongside the
/// records that did normalize; never aborts a pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordFault {
    pub course_id: String,
    pub class_id: Option<String>,
    pub reason: String,
}

impl RecordFault {
    pub fn new(course_id: impl Into<String>, class_id: Option<String>, err: &AppError) -> Self {
        Self {
            course_id: course_id.into(),
            class_id,
            reason: err.to_string(),
        }
    }
}
