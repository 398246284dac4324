//! Matchmaking and the connection gateway.
//!
//! - [`Casino`] — Lobby pairing, move routing, settlement
//! - [`Registry`] — Live matches by identifier
//! - [`Lobby`] — FIFO of participants waiting for an opponent
//! - [`Join`] — Connection parameters
//! - `Server` — actix-web HTTP and WebSocket listener (server feature)
mod casino;
mod join;
mod lobby;
mod registry;
#[cfg(feature = "server")]
mod config;
#[cfg(feature = "server")]
mod server;

pub use casino::*;
pub use join::*;
pub use lobby::*;
pub use registry::*;
#[cfg(feature = "server")]
pub use config::*;
#[cfg(feature = "server")]
pub use server::*;
