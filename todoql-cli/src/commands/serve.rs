//! HTTP server command
//!
//! Opens the store once, migrates and seeds it, then serves GraphQL until
//! shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use todoql_server::db::{
    create_pool_with_options, migrations, seed_if_empty, DEFAULT_DATABASE_URL,
    DEFAULT_MAX_CONNECTIONS,
};
use todoql_server::{run_server, ServerConfig, SharedStore, SqliteTodoStore};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TODOQL_BIND", default_value = "127.0.0.1:8081")]
    pub bind: SocketAddr,

    /// Database URL (sqlite://path.db or sqlite::memory:)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Do not insert demo todos into an empty database
    #[arg(long)]
    pub no_seed: bool,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!(database = %args.database_url, "Opening todo store");

    let pool = create_pool_with_options(&args.database_url, args.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", args.database_url))?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    let store = SqliteTodoStore::new(pool);
    if !args.no_seed {
        seed_if_empty(&store)
            .await
            .context("Failed to seed todo store")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    let store: SharedStore = Arc::new(store);
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
