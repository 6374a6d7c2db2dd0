//! tictac_server - shared tic-tac-toe board over WebSockets.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tictac_server::ServerConfig;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { config, host, port } => {
            let config = ServerConfig::load_or_default(&config)?
                .with_host(host)
                .with_port(port);
            init_tracing(config.log_filter());
            serve(config).await
        }
        Command::Config { config } => print_config(&config),
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

#[instrument(skip_all, fields(addr = %config.bind_address()))]
async fn serve(config: ServerConfig) -> Result<()> {
    info!("Starting tictac_server");
    tictac_server::run(config).await
}

fn print_config(path: &Path) -> Result<()> {
    let config = ServerConfig::load_or_default(path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
