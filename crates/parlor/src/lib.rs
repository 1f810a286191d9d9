//! # Parlor
//!
//! A minimal multi-room text chat server. Clients connect over TCP,
//! answer two prompts (room, then nickname), and land on the roster of
//! the room they named. Rooms are created lazily and live for the life of
//! the process.
//!
//! This crate ties the pieces together: environment configuration, the
//! accept loop, and the per-connection onboarding handler. The room
//! registry itself lives in `parlor-room`; the prompt protocol in
//! `parlor-wire`.
//!
//! The current core is join-only: rosters grow, nothing broadcasts, and
//! nothing is torn down until the process exits.

mod config;
mod error;
mod handler;
mod server;

pub use config::ServerConfig;
pub use error::ServerError;
pub use server::{ChatServer, TcpRegistry};
