//! WebSocket game server: axum routes, connection handlers and the event router.

mod handler;
pub mod router;
mod server;
mod signal;
pub mod state;

pub use router::{EventRouter, RouterError, RouterHandle};
pub use server::Server;
