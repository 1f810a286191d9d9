//! Room registry core for Parlor.
//!
//! The registry is the only shared mutable state in the server: a
//! process-wide map from room name to [`Room`], guarded by a single
//! exclusive lock. All access goes through the atomic
//! [`RoomRegistry::open_room`] operation; the raw map is never exposed,
//! so rooms cannot be read or mutated without holding the lock.
//!
//! Everything here is generic over the transport handle type `C`, so the
//! registry works the same whether a roster entry parks a TCP write half
//! or a unit value in tests.
//!
//! # Key types
//!
//! - [`RoomRegistry`] — lock-guarded collection of all rooms
//! - [`Room`] — named roster of joined clients
//! - [`Client`] — one connected peer's state
//! - [`Message`] — stubbed shape for a future fan-out feature

mod client;
mod registry;
mod room;

pub use client::{Client, Message};
pub use registry::RoomRegistry;
pub use room::Room;
