//! Authoritative game-state server for a top-down multiplayer shooter.
//!
//! The server owns the canonical set of connected players and the items lying
//! on the ground, applies client events one at a time and fans the resulting
//! state deltas out over WebSocket.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// wiring
pub mod bootstrap;
pub mod config;
