//! Repository traits and the PostgreSQL implementations
//!
//! Every repository distinguishes "row absent" (`DbError::NotFound`)
//! from any other storage failure. Nothing here retries.

pub mod articles;
pub mod comments;

use async_trait::async_trait;

use crate::models::{Article, Comment, NewComment};

pub use articles::PgArticleRepo;
pub use comments::PgCommentRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl DbError {
    pub(crate) fn article_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "article",
            id,
        }
    }

    /// True when the referenced row does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// CRUD over articles
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Insert an article. The store assigns `id`; the caller's value is ignored.
    async fn add(&self, article: &Article) -> Result<Article, DbError>;

    async fn get_by_id(&self, id: i64) -> Result<Article, DbError>;

    /// Overwrite name and rating of the article with `article.id`.
    async fn update(&self, article: &Article) -> Result<(), DbError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), DbError>;
}

/// Create and list comments
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a comment under an existing article.
    ///
    /// Fails with `NotFound` and writes nothing when the article is absent.
    async fn add_comment(&self, comment: &NewComment) -> Result<Comment, DbError>;

    /// All comments of an article in insertion order; empty when there are none.
    async fn comments_for_article(&self, article_id: i64) -> Result<Vec<Comment>, DbError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinguished() {
        assert!(DbError::article_not_found(3).is_not_found());
        assert!(!DbError::Sqlx(sqlx::Error::PoolTimedOut).is_not_found());
    }

    #[test]
    fn not_found_display() {
        assert_eq!(DbError::article_not_found(3).to_string(), "article 3 not found");
    }
}

/// Pool with the documented schema applied, for `--ignored` database tests.
#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = crate::db::create_pool(&url)
        .await
        .expect("pool creation failed");
    sqlx::raw_sql(include_str!("../../../schema.sql"))
        .execute(&pool)
        .await
        .expect("schema setup failed");
    pool
}
