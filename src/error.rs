use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid YouTube URL")]
    InvalidUrl,

    #[error("{0}")]
    Transcript(String),

    #[error("{0}")]
    Summarize(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Single mapping from internal failures to HTTP responses: invalid
/// input is the caller's fault, every dependency failure collapses
/// into a generic 500 carrying the underlying error text.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidUrl => StatusCode::BAD_REQUEST,
            AppError::Transcript(_) | AppError::Summarize(_) | AppError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
