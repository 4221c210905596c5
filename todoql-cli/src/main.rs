//! todoql CLI - GraphQL todo service
//!
//! - `serve`: run the GraphQL HTTP server with the GraphiQL explorer
//! - `schema`: print the GraphQL SDL

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "todoql",
    author,
    version,
    about = "GraphQL todo service backed by SQLite"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the GraphQL HTTP server
    Serve(commands::ServeArgs),
    /// Print the GraphQL schema (SDL)
    Schema(commands::SchemaArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Schema(args) => commands::run_schema(args)?,
    }
    Ok(())
}
