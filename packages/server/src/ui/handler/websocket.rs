//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{PlayerId, PlayerIdFactory},
    infrastructure::dto::websocket::ClientEvent,
    ui::{router::RouterHandle, state::AppState},
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives frames from the rx channel and pushes them to the WebSocket sender.
///
/// The channel is closed when the MessagePusher unregisters this client,
/// which ends the task.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sender.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    })
}

/// Spawns a task that decodes inbound frames and forwards them to the router.
fn receive_loop(
    mut receiver: futures_util::stream::SplitStream<WebSocket>,
    router: RouterHandle,
    player_id: PlayerId,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error from '{}': {}", player_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => match serde_json::from_str::<ClientEvent>(&text) {
                    Ok(event) => {
                        if router.dispatch(player_id.clone(), event).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Dropping malformed frame from '{}': {}", player_id, e);
                    }
                },
                Message::Close(_) => {
                    tracing::info!("Client '{}' requested close", player_id);
                    break;
                }
                // Ping/pong is handled by the WebSocket protocol; binary frames are not part of the protocol
                _ => {}
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let player_id = PlayerIdFactory::generate();
    let (sender, receiver) = socket.split();

    // Create a channel for this client to receive frames
    let (tx, rx) = mpsc::unbounded_channel();

    // Seat the player (init and newPlayer are queued by the router)
    match state.router.connect(player_id.clone(), tx).await {
        Ok(session) => {
            tracing::info!(
                "Player '{}' connected at ({:.1}, {:.1})",
                player_id,
                session.position.x,
                session.position.y
            );
        }
        Err(e) => {
            tracing::warn!("Failed to connect player '{}': {}", player_id, e);
            return;
        }
    }

    let mut send_task = pusher_loop(rx, sender);
    let mut recv_task = receive_loop(receiver, state.router.clone(), player_id.clone());

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    if let Err(e) = state.router.disconnect(player_id.clone()) {
        tracing::warn!("Failed to disconnect player '{}': {}", player_id, e);
    } else {
        tracing::info!("Player '{}' disconnected", player_id);
    }
}
