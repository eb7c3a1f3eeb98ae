//! HTTP server command
//!
//! Builds the store, the dispatcher and runs the listening loop until shutdown.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use articles_server::db::create_pool_with_options;
use articles_server::{run_server, AppState, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", required_unless_present = "in_memory")]
    pub database_url: Option<String>,

    /// Maximum connections in the database pool
    #[arg(long, default_value_t = 5)]
    pub max_connections: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub request_timeout: u64,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Keep articles and comments in process memory instead of PostgreSQL
    #[arg(long)]
    pub in_memory: bool,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
            request_timeout: Duration::from_secs(self.request_timeout),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config();

    let state = if args.in_memory {
        tracing::warn!("Using in-memory store; data is lost on exit");
        AppState::in_memory()
    } else {
        let database_url = args
            .database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        let pool = create_pool_with_options(database_url, args.max_connections)
            .await
            .context("Failed to create database pool")?;
        AppState::postgres(pool)
    };

    tracing::info!("Starting articles server on {}", config.bind_addr);
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
