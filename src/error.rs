// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use crate::models::UserId;
use crate::services::{DirectoryError, SourceError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unknown user: {0}")]
    UnknownUser(UserId),

    #[error("Data source error: {0}")]
    DataSource(String),
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        AppError::DataSource(err.to_string())
    }
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::UnknownUser(user_id) => AppError::UnknownUser(user_id),
            other => AppError::DataSource(other.to_string()),
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::UnknownUser(user_id) => (
                StatusCode::NOT_FOUND,
                "unknown_user",
                Some(format!("User {} not found", user_id)),
            ),
            AppError::DataSource(msg) => {
                tracing::error!(error = %msg, "Data source error");
                (StatusCode::INTERNAL_SERVER_ERROR, "data_source_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
