//! Command-line interface for tictac_server.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictac_server::DEFAULT_CONFIG_PATH;

/// Real-time tic-tac-toe coordinator
#[derive(Parser, Debug)]
#[command(name = "tictac_server")]
#[command(about = "Shared tic-tac-toe board over WebSockets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the game server
    Serve {
        /// Path to the TOML config file (optional; defaults apply if missing)
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Path to the TOML config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
}
