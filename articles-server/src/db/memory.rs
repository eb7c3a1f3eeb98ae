//! In-memory repositories
//!
//! Same observable behavior as the PostgreSQL repositories: ids start at 1
//! and only grow, `created_at` is stamped on insert, comments list in
//! insertion order. A single lock covers both tables, so the parent check
//! and the comment insert happen atomically.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::repos::{ArticleRepository, CommentRepository, DbError};
use crate::models::{Article, Comment, NewComment};

#[derive(Default)]
struct Tables {
    articles: BTreeMap<i64, Article>,
    comments: Vec<Comment>,
    last_article_id: i64,
    last_comment_id: i64,
}

/// Article and comment store held in process memory
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleRepository for MemoryStore {
    async fn add(&self, article: &Article) -> Result<Article, DbError> {
        let mut tables = self.tables.write().await;
        tables.last_article_id += 1;
        let created = Article {
            id: tables.last_article_id,
            name: article.name.clone(),
            rating: article.rating,
        };
        tables.articles.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> Result<Article, DbError> {
        self.tables
            .read()
            .await
            .articles
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::article_not_found(id))
    }

    async fn update(&self, article: &Article) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .articles
            .get_mut(&article.id)
            .ok_or_else(|| DbError::article_not_found(article.id))?;
        stored.name = article.name.clone();
        stored.rating = article.rating;
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DbError> {
        self.tables
            .write()
            .await
            .articles
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DbError::article_not_found(id))
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn add_comment(&self, comment: &NewComment) -> Result<Comment, DbError> {
        let mut tables = self.tables.write().await;
        if !tables.articles.contains_key(&comment.article_id) {
            return Err(DbError::article_not_found(comment.article_id));
        }

        tables.last_comment_id += 1;
        let created = Comment {
            id: tables.last_comment_id,
            article_id: comment.article_id,
            text: comment.text.clone(),
            created_at: Utc::now(),
        };
        tables.comments.push(created.clone());
        Ok(created)
    }

    async fn comments_for_article(&self, article_id: i64) -> Result<Vec<Comment>, DbError> {
        Ok(self
            .tables
            .read()
            .await
            .comments
            .iter()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect())
    }
}
