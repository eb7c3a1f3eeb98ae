//! Domain entities and wire request shapes
//!
//! Entities serialize with their field names as JSON keys.
//! Request shapes are mapped into entities before reaching a repository.

pub mod article;
pub mod comment;

pub use article::{Article, ArticleRequest};
pub use comment::{Comment, CommentRequest, NewComment};
