//! Article repository
//!
//! - add: INSERT ... RETURNING id
//! - update/delete: zero affected rows means the article is absent

use async_trait::async_trait;
use sqlx::PgPool;

use super::{ArticleRepository, DbError};
use crate::models::Article;

/// PostgreSQL-backed article repository
#[derive(Clone)]
pub struct PgArticleRepo {
    pool: PgPool,
}

impl PgArticleRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepo {
    async fn add(&self, article: &Article) -> Result<Article, DbError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO articles (name, rating)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&article.name)
        .bind(article.rating)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id, "article inserted");
        Ok(Article {
            id,
            name: article.name.clone(),
            rating: article.rating,
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Article, DbError> {
        sqlx::query_as::<_, Article>("SELECT id, name, rating FROM articles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::article_not_found(id))
    }

    async fn update(&self, article: &Article) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE articles SET name = $1, rating = $2 WHERE id = $3")
            .bind(&article.name)
            .bind(article.rating)
            .bind(article.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::article_not_found(article.id));
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::article_not_found(id));
        }
        tracing::debug!(id, "article deleted");
        Ok(())
    }
}
