//! HTTP layer - dispatcher, handlers and the server runner
//!
//! Errors leave handlers as `ApiError` and become a status code plus
//! the error text.

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::{ApiError, ErrorKind};
pub use server::{build_router, run_server, ServerConfig, ServerError};
