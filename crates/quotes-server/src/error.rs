//! API error types with JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use quotes_core::QuoteError;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),

    /// Domain error from the use-case layer.
    #[error(transparent)]
    Quote(#[from] QuoteError),
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Quote(e) => match e {
                QuoteError::EmptyAuthor | QuoteError::EmptyText | QuoteError::InvalidId(_) => {
                    "BAD_REQUEST"
                }
                QuoteError::NoQuotesAvailable | QuoteError::QuoteNotFound(_) => "NOT_FOUND",
                QuoteError::Internal(_) => "INTERNAL_ERROR",
            },
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Quote(e) => match e {
                QuoteError::EmptyAuthor | QuoteError::EmptyText | QuoteError::InvalidId(_) => {
                    StatusCode::BAD_REQUEST
                }
                QuoteError::NoQuotesAvailable | QuoteError::QuoteNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                QuoteError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Message safe to show the caller.
    ///
    /// Domain kinds use their canonical wording; internal failures
    /// collapse to a generic message with no detail.
    pub fn public_message(&self) -> String {
        match self {
            Self::BadRequest(message) => message.clone(),
            Self::Internal(_) => "Internal server error".to_string(),
            Self::Quote(e) => match e {
                QuoteError::EmptyAuthor => "Author cannot be empty",
                QuoteError::EmptyText => "Quote text cannot be empty",
                QuoteError::NoQuotesAvailable => "No quotes available",
                QuoteError::QuoteNotFound(_) => "Quote not found",
                QuoteError::InvalidId(_) => "Invalid quote ID",
                QuoteError::Internal(_) => "Internal server error",
            }
            .to_string(),
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorDetails,
}

/// Error details within the response.
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    /// Error code (e.g., "NOT_FOUND", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.code().to_string(),
                message: self.public_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
