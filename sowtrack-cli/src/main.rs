//! sowtrack - REST API for statement-of-work milestones
//!
//! Entry point: parses arguments, initializes tracing, builds the
//! database pool, and runs the HTTP server until shutdown. The pool's
//! lifecycle is owned here; the server and its handlers only borrow it.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use sowtrack_server::db::create_pool;
use sowtrack_server::http::{run_server, ServerConfig};

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "sowtrack",
    author,
    version,
    about = "REST API for statement-of-work milestones"
)]
struct Cli {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    cors_permissive: bool,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap resolves env-backed arguments
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_setup::init_tracing(&tracing_setup::TracingConfig { debug: cli.debug })?;

    let database_url = cli
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .context("DATABASE_URL not set. Set via --database-url or the DATABASE_URL env var")?;

    tracing::info!("Starting sowtrack server on {}", cli.bind);

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    let config = ServerConfig {
        bind_addr: cli.bind,
        cors_permissive: cli.cors_permissive,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
