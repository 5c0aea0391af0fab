//! Authoritative multiplayer shooter server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin skirmish-server
//! cargo run --bin skirmish-server -- --host 0.0.0.0 --port=3000
//! PORT=4000 cargo run --bin skirmish-server
//! ```

use clap::Parser;
use skirmish_server::{bootstrap::build_server, config::ServerConfig};
use skirmish_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let config = ServerConfig::parse();

    let server = match build_server(&config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run(config.host, config.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
