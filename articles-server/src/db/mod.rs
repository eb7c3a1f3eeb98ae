//! Database layer - connection pool, repository traits and their backends
//!
//! - PostgreSQL repositories over a shared `PgPool`
//! - In-memory repositories with the same observable behavior
//! - Comment creation checks its parent article inside a transaction

pub mod memory;
pub mod pool;
pub mod repos;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
