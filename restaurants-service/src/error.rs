//! Error types and HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::repository::{RepositoryError, RepositoryErrorKind};

/// Result type alias using the service error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// Structured repository error with operation context
    #[error("{0}")]
    Repository(RepositoryError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
///
/// The wire shape clients consume: a human-readable `message` plus the HTTP
/// status, with an optional machine-readable `code`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub message: String,

    /// Optional error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// HTTP status code
    pub status: u16,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            status: status.as_u16(),
        }
    }

    /// Create error response with a code
    pub fn with_code(
        status: StatusCode,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            code: Some(code.into()),
            status: status.as_u16(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            Error::Config(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::with_code(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIG_ERROR",
                    e.to_string(),
                ),
            ),

            Error::Repository(ref e) => {
                // Log with structured context
                tracing::error!(
                    operation = %e.operation,
                    kind = %e.kind,
                    entity_id = ?e.entity_id,
                    retriable = e.is_retriable(),
                    "Repository error: {}", e.message
                );

                // Map error kind to HTTP status code
                let status = match e.kind {
                    RepositoryErrorKind::NotFound => StatusCode::NOT_FOUND,
                    RepositoryErrorKind::ConnectionFailed | RepositoryErrorKind::Timeout => {
                        StatusCode::SERVICE_UNAVAILABLE
                    }
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };

                // Generate error code from kind
                let code = format!("REPOSITORY_{}", e.kind.to_string().to_uppercase());

                // User-facing message (don't expose internal details)
                let user_message = match e.kind {
                    RepositoryErrorKind::NotFound => "Resource not found",
                    RepositoryErrorKind::ConnectionFailed | RepositoryErrorKind::Timeout => {
                        "Service temporarily unavailable"
                    }
                    _ => "Repository operation failed",
                };

                (status, ErrorResponse::with_code(status, code, user_message))
            }

            Error::Io(e) => {
                tracing::error!("I/O error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_code(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "IO_ERROR",
                        "I/O operation failed",
                    ),
                )
            }

            Error::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::with_code(StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ),

            Error::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_code(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ),

            Error::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_code(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "Internal server error",
                    ),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

// Manual From implementations for boxed errors
impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        Error::Repository(err)
    }
}
