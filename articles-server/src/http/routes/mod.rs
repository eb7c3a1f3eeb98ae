//! Route handlers organized by resource

pub mod articles;
pub mod comments;

use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::http::error::ApiError;

/// Serialize an entity as the JSON response body.
pub(crate) fn json_response<T: Serialize>(value: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value).map_err(ApiError::Serialization)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
