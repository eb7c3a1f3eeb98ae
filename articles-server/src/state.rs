//! Application state shared across handlers

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::{ArticleRepository, CommentRepository, MemoryStore, PgArticleRepo, PgCommentRepo};

/// Repositories the handlers run against.
///
/// Holds no entity data itself; every request reads or writes through the store.
#[derive(Clone)]
pub struct AppState {
    pub articles: Arc<dyn ArticleRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

impl AppState {
    pub fn new(
        articles: Arc<dyn ArticleRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self { articles, comments }
    }

    /// Both repositories over one PostgreSQL pool
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgArticleRepo::new(pool.clone())),
            Arc::new(PgCommentRepo::new(pool)),
        )
    }

    /// Both repositories over one fresh in-memory store
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(store.clone(), store)
    }
}
