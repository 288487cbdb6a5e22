use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Malformed employee record: {0}")]
    DataFormat(String),

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // "No course history yet" is an expected condition, not a server fault
            AppError::UnknownUser(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::DegenerateInput(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::DataFormat(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::ExternalApi(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::HttpClient(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
