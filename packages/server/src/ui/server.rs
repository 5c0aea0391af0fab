//! Server execution logic.

use std::{future::Future, sync::Arc};

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::usecase::GetWorldStateUseCase;

use super::{
    handler::{debug_world_state, health_check, websocket_handler},
    router::EventRouter,
    signal::shutdown_signal,
    state::AppState,
};

/// WebSocket game server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(event_router, get_world_state_usecase);
/// server.run("0.0.0.0".to_string(), 3000).await?;
/// ```
pub struct Server {
    /// EventRouter（状態を変更するユースケースを一つのタスクで実行する）
    event_router: EventRouter,
    /// GetWorldStateUseCase（ワールド状態取得のユースケース）
    get_world_state_usecase: Arc<GetWorldStateUseCase>,
}

impl Server {
    pub fn new(
        event_router: EventRouter,
        get_world_state_usecase: Arc<GetWorldStateUseCase>,
    ) -> Self {
        Self {
            event_router,
            get_world_state_usecase,
        }
    }

    /// Run the game server until Ctrl+C / SIGTERM
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "0.0.0.0")
    /// * `port` - The port number to bind to (e.g., 3000)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> std::io::Result<()> {
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let (router, router_task) = self.event_router.spawn();
        let app_state = Arc::new(AppState {
            router,
            get_world_state_usecase: self.get_world_state_usecase,
        });

        let app = Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/debug/world", get(debug_world_state))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        tracing::info!("Game server listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        router_task.abort();
        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
