//! Real-time coordinator for a single shared tic-tac-toe board.
//!
//! # Architecture
//!
//! - **Authority**: owns the one board and turn pointer, validates moves,
//!   detects wins and draws, and resets after a finished game
//! - **Substrate**: the outbound seam, "emit to one" and "emit to all"
//! - **Hub**: the connection registry implementing the substrate
//! - **Transport**: WebSocket endpoint feeding client events to the authority
//! - **Protocol**: JSON event frames exchanged with clients
//!
//! # Example
//!
//! ```no_run
//! use tictac_server::{ServerConfig, run};
//!
//! # async fn example() -> anyhow::Result<()> {
//! run(ServerConfig::default()).await
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod authority;
mod config;
mod hub;
mod protocol;
mod substrate;
mod transport;

pub use authority::GameAuthority;
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, ServerConfig};
pub use hub::ConnectionHub;
pub use protocol::{
    BoardUpdate, ClientEvent, GameOverNotice, PlayRequest, ProtocolError, ServerEvent, Verdict,
};
pub use substrate::{PartyId, Substrate};
pub use transport::{router, run};
