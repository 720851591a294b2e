//! Error mapping for the HTTP boundary

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use spectra_core::SpectraError;
use thiserror::Error;

/// Errors returned by API handlers
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed query parameter; rejected before any fetch
    #[error("{0}")]
    BadRequest(String),

    /// Failure from the scraper
    #[error(transparent)]
    Scraper(#[from] SpectraError),
}

/// API error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    /// Status code and body for this error.
    ///
    /// NotFound shares the 500 of transport failures; callers of the library
    /// still see the two apart.
    fn parts(&self) -> (StatusCode, ErrorResponse) {
        match self {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: msg.clone(),
                    details: None,
                },
            ),
            AppError::Scraper(SpectraError::InvalidInput(msg)) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: msg.clone(),
                    details: None,
                },
            ),
            AppError::Scraper(e @ SpectraError::NotFound(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: e.to_string(),
                    details: None,
                },
            ),
            AppError::Scraper(SpectraError::Transport(source)) => {
                tracing::error!("Upstream error: {}", source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Failed to fetch page".to_string(),
                        details: source
                            .status()
                            .map(|s| format!("upstream status {}", s.as_u16())),
                    },
                )
            }
            AppError::Scraper(e @ SpectraError::Parse(_)) => {
                tracing::error!("Extraction error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal error".to_string(),
                        details: None,
                    },
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.parts();
        (status, Json(body)).into_response()
    }
}

/// Handler result alias
pub type AppResult<T> = Result<T, AppError>;
