use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use flows::FlowError;
use serde::Serialize;

#[derive(Debug)]
#[allow(dead_code)]
pub enum AppError {
    Validation(String),
    Generation(String),
    Unauthorized(String),
    Database(db::DbError),
    Internal(String),
}

/// Failure half of the uniform action envelope.
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Generation(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Database(err) => {
                tracing::error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error occurred".to_string(),
                )
            }
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            success: false,
            error: message,
        });

        (status, body).into_response()
    }
}

impl From<FlowError> for AppError {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::Validation(cause) => AppError::Validation(cause.to_string()),
            FlowError::Generation(message) => AppError::Generation(message),
        }
    }
}

impl From<db::DbError> for AppError {
    fn from(err: db::DbError) -> Self {
        AppError::Database(err)
    }
}
