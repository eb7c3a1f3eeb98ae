//! Article endpoints
//!
//! `GET /article` is the one place that joins both entities: the article
//! is fetched first, then its comments.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};

use super::json_response;
use crate::http::error::ApiError;
use crate::http::extractors::{ArticleId, JsonBody};
use crate::models::{Article, ArticleRequest, Comment};
use crate::state::AppState;

/// POST /article - create an article, responding with the stored entity
async fn create_article(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<ArticleRequest>,
) -> Result<Response, ApiError> {
    let article = state.articles.add(&Article::from(req)).await?;
    tracing::info!(id = article.id, "article created");
    json_response(&article)
}

/// GET /article?id= - article followed by its comments
async fn get_article(
    State(state): State<Arc<AppState>>,
    ArticleId(id): ArticleId,
) -> Result<Response, ApiError> {
    let article = state.articles.get_by_id(id).await?;

    // The article exists at this point, so any failure here is a 500.
    let comments = state
        .comments
        .comments_for_article(id)
        .await
        .map_err(ApiError::storage)?;

    let body = render_article_with_comments(&article, &comments)?;
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response())
}

/// PUT /article - overwrite name and rating of an existing article
async fn update_article(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<ArticleRequest>,
) -> Result<StatusCode, ApiError> {
    let article = Article::from(req);
    state.articles.update(&article).await?;
    tracing::info!(id = article.id, "article updated");
    Ok(StatusCode::OK)
}

/// DELETE /article?id= - remove an article; its comments stay in place
async fn delete_article(
    State(state): State<Arc<AppState>>,
    ArticleId(id): ArticleId,
) -> Result<StatusCode, ApiError> {
    state.articles.delete_by_id(id).await?;
    tracing::info!(id, "article deleted");
    Ok(StatusCode::OK)
}

/// Text dump of an article and its comments, one JSON document per line.
pub fn render_article_with_comments(
    article: &Article,
    comments: &[Comment],
) -> Result<String, ApiError> {
    let mut out = String::from("Article json: ");
    out.push_str(&serde_json::to_string(article).map_err(ApiError::Serialization)?);
    out.push('\n');

    out.push_str("Comments: \n");
    if comments.is_empty() {
        out.push_str("no comments\n");
    }
    for comment in comments {
        out.push_str(&serde_json::to_string(comment).map_err(ApiError::Serialization)?);
        out.push('\n');
    }

    Ok(out)
}

/// Article routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/article",
        post(create_article)
            .get(get_article)
            .put(update_article)
            .delete(delete_article),
    )
}
