//! Errors surfaced by the report fetcher and the HTTP layer.

use crate::models::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Missing credential or other operator-fixable setup problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Target url rejected before any request was made.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Timeout, DNS failure, connection reset, truncated body.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The PageSpeed API answered with a non-success status.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// Upstream body was not JSON.
    #[error("Malformed upstream response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    pub fn missing_api_key() -> Self {
        FetchError::Config("missing API key".to_string())
    }

    /// Transient failures a user can simply try again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Network(_))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            FetchError::Config(_) | FetchError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            FetchError::Network(_) | FetchError::Parse(_) => StatusCode::BAD_GATEWAY,
            FetchError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        }
    }
}

impl IntoResponse for FetchError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
