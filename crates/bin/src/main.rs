//! ContactFlow CLI entry point.

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("contactflow=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Serve(args) => commands::serve::run(args).await,
        Commands::Health(args) => commands::health::run(args).await,
        Commands::List(args) => commands::contacts::list(args).await,
        Commands::Add(args) => commands::contacts::add(args).await,
        Commands::Update(args) => commands::contacts::update(args).await,
        Commands::Delete(args) => commands::contacts::delete(args).await,
    }
}
