//! Comment endpoints

use std::sync::Arc;

use axum::{extract::State, response::Response, routing::post, Router};

use super::json_response;
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::models::{CommentRequest, NewComment};
use crate::state::AppState;

/// POST /comment - attach a comment to an existing article
async fn create_comment(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CommentRequest>,
) -> Result<Response, ApiError> {
    let comment = state
        .comments
        .add_comment(&NewComment::from(req))
        .await
        .inspect_err(|e| {
            if e.is_not_found() {
                tracing::warn!("comment rejected: {}", e);
            }
        })?;

    tracing::info!(id = comment.id, article_id = comment.article_id, "comment created");
    json_response(&comment)
}

/// Comment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/comment", post(create_comment))
}
