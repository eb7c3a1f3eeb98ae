//! articles-server: articles and their comments over HTTP
//!
//! Requests are dispatched by path and method to handlers, which decode
//! the payload, call a repository and encode the result. PostgreSQL is
//! the store; an in-memory store with the same behavior backs the tests.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use db::DbError;
pub use http::{build_router, run_server, ApiError, ErrorKind, ServerConfig};
pub use state::AppState;
