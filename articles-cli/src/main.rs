//! articles CLI - runs the articles and comments HTTP service
//!
//! Configuration comes from flags, the environment, and a `.env` file
//! in the working directory (for `DATABASE_URL`).

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "articles",
    author,
    version,
    about = "HTTP service for articles and their comments"
)]
struct Cli {
    /// Debug logging (RUST_LOG overrides)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the environment and flags still apply.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }
    Ok(())
}
