//! Comment repository
//!
//! Creation runs in one transaction: the parent article row is locked
//! with `FOR SHARE` before the insert, so a concurrent delete of that
//! article waits until the comment is committed.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{CommentRepository, DbError};
use crate::models::{Comment, NewComment};

/// PostgreSQL-backed comment repository
#[derive(Clone)]
pub struct PgCommentRepo {
    pool: PgPool,
}

impl PgCommentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepo {
    async fn add_comment(&self, comment: &NewComment) -> Result<Comment, DbError> {
        let mut tx = self.pool.begin().await?;

        let parent: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM articles WHERE id = $1 FOR SHARE")
                .bind(comment.article_id)
                .fetch_optional(&mut *tx)
                .await?;

        if parent.is_none() {
            // Dropping the transaction rolls it back.
            return Err(DbError::article_not_found(comment.article_id));
        }

        let created: Comment = sqlx::query_as(
            r#"
            INSERT INTO comments (article_id, text)
            VALUES ($1, $2)
            RETURNING id, article_id, text, created_at
            "#,
        )
        .bind(comment.article_id)
        .bind(&comment.text)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(id = created.id, article_id = created.article_id, "comment inserted");
        Ok(created)
    }

    async fn comments_for_article(&self, article_id: i64) -> Result<Vec<Comment>, DbError> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, article_id, text, created_at
            FROM comments
            WHERE article_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(article_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::{test_pool, ArticleRepository, PgArticleRepo};
    use crate::models::Article;

    async fn seed_article(pool: &PgPool) -> Article {
        PgArticleRepo::new(pool.clone())
            .add(&Article {
                id: 0,
                name: "pg-comments".into(),
                rating: 3,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn add_comment_populates_id_and_timestamp() {
        let pool = test_pool().await;
        let article = seed_article(&pool).await;
        let repo = PgCommentRepo::new(pool);

        let created = repo
            .add_comment(&NewComment {
                article_id: article.id,
                text: "hi".into(),
            })
            .await
            .unwrap();

        assert!(created.id > 0);
        assert_eq!(created.article_id, article.id);
        assert_eq!(repo.comments_for_article(article.id).await.unwrap(), vec![created]);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn add_comment_for_missing_article_writes_nothing() {
        let pool = test_pool().await;
        let repo = PgCommentRepo::new(pool.clone());

        let err = repo
            .add_comment(&NewComment {
                article_id: i64::MAX,
                text: "orphan".into(),
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments WHERE article_id = $1")
            .bind(i64::MAX)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn no_comments_is_empty_not_error() {
        let pool = test_pool().await;
        let article = seed_article(&pool).await;
        let comments = PgCommentRepo::new(pool)
            .comments_for_article(article.id)
            .await
            .unwrap();
        assert!(comments.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_waits_for_pending_comment() {
        // Parent deleted concurrently with a comment insert: the delete
        // blocks on the share lock, so the comment always lands first.
        let pool = test_pool().await;
        let article_id = seed_article(&pool).await.id;

        let mut tx = pool.begin().await.unwrap();
        sqlx::query("SELECT id FROM articles WHERE id = $1 FOR SHARE")
            .bind(article_id)
            .execute(&mut *tx)
            .await
            .unwrap();

        let deleter = {
            let pool = pool.clone();
            tokio::spawn(async move { PgArticleRepo::new(pool).delete_by_id(article_id).await })
        };
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        assert!(!deleter.is_finished());

        sqlx::query("INSERT INTO comments (article_id, text) VALUES ($1, 'racing')")
            .bind(article_id)
            .execute(&mut *tx)
            .await
            .unwrap();
        tx.commit().await.unwrap();

        deleter.await.unwrap().unwrap();
        let comments = PgCommentRepo::new(pool)
            .comments_for_article(article_id)
            .await
            .unwrap();
        assert_eq!(comments.len(), 1);
    }
}
