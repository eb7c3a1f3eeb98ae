//! API error types with IntoResponse
//!
//! Every failure ends the request with a status from `ErrorKind` and the
//! error's text as a plain-text body. A body the server could not read
//! keeps the status axum chose for it (413 when over the size limit).

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::DbError;

/// Discriminator checked by every handler to pick a response status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Referenced entity is absent (404)
    NotFound,
    /// Malformed body or parameters (400)
    InvalidInput,
    /// Any other store or query failure (500)
    StorageFailure,
    /// Encoding a response failed (500)
    SerializationFailure,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::StorageFailure | Self::SerializationFailure => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// API error type with automatic HTTP status mapping
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid input: {}", .0.body_text())]
    UnreadableBody(BytesRejection),

    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    #[error("{0}")]
    Storage(DbError),

    #[error("serialization error: {0}")]
    Serialization(serde_json::Error),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) | Self::UnreadableBody(_) => ErrorKind::InvalidInput,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Storage(_) => ErrorKind::StorageFailure,
            Self::Serialization(_) => ErrorKind::SerializationFailure,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnreadableBody(rejection) => rejection.status(),
            _ => self.kind().status(),
        }
    }

    /// Treat any repository error as a storage failure, including `NotFound`.
    ///
    /// Used once the referenced entity is already known to exist.
    pub fn storage(e: DbError) -> Self {
        Self::Storage(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(kind = ?self.kind(), "request failed: {}", self);
        } else {
            tracing::debug!(kind = ?self.kind(), "request rejected: {}", self);
        }

        (status, self.to_string()).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Storage(e),
        }
    }
}
