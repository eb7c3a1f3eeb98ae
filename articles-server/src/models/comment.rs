//! Comment entity
//!
//! Comments are created and listed only. `id` and `created_at` are
//! assigned by the store at insert time and never change afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Comment record as stored in `comments`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: i64,
    pub article_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A comment that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub article_id: i64,
    pub text: String,
}

/// Body of `POST /comment`. Absent fields take their zero value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommentRequest {
    pub article_id: i64,
    pub text: String,
}

impl From<CommentRequest> for NewComment {
    fn from(req: CommentRequest) -> Self {
        Self {
            article_id: req.article_id,
            text: req.text,
        }
    }
}
