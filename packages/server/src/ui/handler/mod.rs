mod http;
mod websocket;

pub use http::{debug_world_state, health_check};
pub use websocket::websocket_handler;
