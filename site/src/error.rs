//! Unified error types for the site
//!
//! This module defines error types for each layer:
//! - `FeedError`: failures reading a feed document (HTTP or disk)
//! - `SettingsError`: failures loading or saving preferences
//! - `ExportError`: failures writing the static site
//! - `AppError`: application layer errors (rendered as JSON for API routes)
//!
//! Page handlers never return `AppError`; they turn feed failures into the
//! fixed messages shown inside the page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Feed source errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        FeedError::Decode(e.to_string())
    }
}

/// Settings store errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Static export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Application layer errors - used by API handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Feed(e) => {
                tracing::error!("Feed error: {}", e);
                (StatusCode::BAD_GATEWAY, "Feed unavailable", None)
            }
            AppError::Settings(SettingsError::InvalidValue(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Settings(e) => {
                tracing::error!("Settings error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
