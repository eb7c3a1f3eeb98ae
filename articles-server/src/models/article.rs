//! Article entity

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Article record as stored in `articles`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Article {
    pub id: i64,
    pub name: String,
    pub rating: i64,
}

/// Body of `POST /article` and `PUT /article`.
///
/// `id` is ignored on create (the store assigns it) and selects the row on update.
/// Absent fields take their zero value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArticleRequest {
    pub id: i64,
    pub name: String,
    pub rating: i64,
}

impl From<ArticleRequest> for Article {
    fn from(req: ArticleRequest) -> Self {
        Self {
            id: req.id,
            name: req.name,
            rating: req.rating,
        }
    }
}
