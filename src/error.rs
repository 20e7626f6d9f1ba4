//! Error types and error handling for the application
//!
//! This module defines the error type every handler returns. All errors
//! implement `IntoResponse` so the wire format is the same everywhere:
//! a JSON object with a single `error` field.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned to callers for any internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";

/// Application-level error types
///
/// Not-found variants keep the term the caller asked for so it can be
/// logged; the response body only carries the fixed, per-endpoint message.
#[derive(Error, Debug)]
pub enum AppError {
    /// No book has the requested id
    #[error("Book not found")]
    BookNotFound(String),

    /// No book has exactly the requested genre
    #[error("No books found for this genre")]
    GenreNotFound(String),

    /// No book author contains the requested fragment
    #[error("No books found for this author")]
    AuthorNotFound(String),

    /// No book title contains the requested fragment
    #[error("No books found matching the title")]
    TitleNotFound(String),

    /// Request did not match any route
    #[error("Route not found")]
    RouteNotFound(String),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status this error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BookNotFound(_)
            | AppError::GenreNotFound(_)
            | AppError::AuthorNotFound(_)
            | AppError::TitleNotFound(_)
            | AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match &self {
            AppError::Internal(err) => {
                tracing::error!(error = ?err, "Request failed");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            AppError::BookNotFound(term)
            | AppError::GenreNotFound(term)
            | AppError::AuthorNotFound(term)
            | AppError::TitleNotFound(term)
            | AppError::RouteNotFound(term) => {
                tracing::debug!(term = %term, "{}", self);
                self.to_string()
            }
        };

        (status, Json(json!({ "error": error_message }))).into_response()
    }
}
