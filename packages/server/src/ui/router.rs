//! Event router: the single writer of the game world.
//!
//! Every WebSocket connection forwards its lifecycle signals and decoded
//! inbound events to one router task over an unbounded channel. The task
//! applies them one at a time, so handlers never interleave and each
//! connection's events are processed in the order they arrived.

use std::sync::Arc;

use thiserror::Error;
use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
};

use crate::{
    domain::{ItemId, PlayerId, PlayerSession, PusherChannel},
    infrastructure::dto::websocket::ClientEvent,
    usecase::{
        ConnectError, ConnectPlayerUseCase, DisconnectPlayerUseCase, MovePlayerUseCase,
        PickupItemUseCase, RelayCombatUseCase, RenamePlayerUseCase, ReportDeathUseCase,
    },
};

/// Work item for the router task.
#[derive(Debug)]
pub enum RouterCommand {
    Connect {
        player_id: PlayerId,
        sender: PusherChannel,
        reply: oneshot::Sender<Result<PlayerSession, ConnectError>>,
    },
    Event {
        player_id: PlayerId,
        event: ClientEvent,
    },
    Disconnect {
        player_id: PlayerId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("Event router is not running")]
    Closed,

    #[error(transparent)]
    Connect(#[from] ConnectError),
}

/// Cloneable handle used by connection tasks to reach the router.
#[derive(Debug, Clone)]
pub struct RouterHandle {
    commands: mpsc::UnboundedSender<RouterCommand>,
}

impl RouterHandle {
    /// Seat a new player and wait until its `init` has been queued.
    pub async fn connect(
        &self,
        player_id: PlayerId,
        sender: PusherChannel,
    ) -> Result<PlayerSession, RouterError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(RouterCommand::Connect {
                player_id,
                sender,
                reply,
            })
            .map_err(|_| RouterError::Closed)?;
        let session = response.await.map_err(|_| RouterError::Closed)??;
        Ok(session)
    }

    pub fn dispatch(&self, player_id: PlayerId, event: ClientEvent) -> Result<(), RouterError> {
        self.commands
            .send(RouterCommand::Event { player_id, event })
            .map_err(|_| RouterError::Closed)
    }

    pub fn disconnect(&self, player_id: PlayerId) -> Result<(), RouterError> {
        self.commands
            .send(RouterCommand::Disconnect { player_id })
            .map_err(|_| RouterError::Closed)
    }
}

/// Owns the use cases that mutate the world.
pub struct EventRouter {
    connect_player_usecase: Arc<ConnectPlayerUseCase>,
    disconnect_player_usecase: Arc<DisconnectPlayerUseCase>,
    move_player_usecase: Arc<MovePlayerUseCase>,
    relay_combat_usecase: Arc<RelayCombatUseCase>,
    report_death_usecase: Arc<ReportDeathUseCase>,
    rename_player_usecase: Arc<RenamePlayerUseCase>,
    pickup_item_usecase: Arc<PickupItemUseCase>,
}

impl EventRouter {
    pub fn new(
        connect_player_usecase: Arc<ConnectPlayerUseCase>,
        disconnect_player_usecase: Arc<DisconnectPlayerUseCase>,
        move_player_usecase: Arc<MovePlayerUseCase>,
        relay_combat_usecase: Arc<RelayCombatUseCase>,
        report_death_usecase: Arc<ReportDeathUseCase>,
        rename_player_usecase: Arc<RenamePlayerUseCase>,
        pickup_item_usecase: Arc<PickupItemUseCase>,
    ) -> Self {
        Self {
            connect_player_usecase,
            disconnect_player_usecase,
            move_player_usecase,
            relay_combat_usecase,
            report_death_usecase,
            rename_player_usecase,
            pickup_item_usecase,
        }
    }

    /// Start the router task. It stops once every handle has been dropped.
    pub fn spawn(self) -> (RouterHandle, JoinHandle<()>) {
        let (commands, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(self.run(rx));
        (RouterHandle { commands }, task)
    }

    async fn run(self, mut rx: mpsc::UnboundedReceiver<RouterCommand>) {
        tracing::debug!("Event router started");
        while let Some(command) = rx.recv().await {
            self.handle(command).await;
        }
        tracing::debug!("Event router stopped");
    }

    async fn handle(&self, command: RouterCommand) {
        match command {
            RouterCommand::Connect {
                player_id,
                sender,
                reply,
            } => {
                let result = self
                    .connect_player_usecase
                    .execute(player_id.clone(), sender)
                    .await;
                let connected = result.is_ok();
                if reply.send(result).is_err() && connected {
                    // The connection went away before the reply; it will never disconnect itself.
                    self.disconnect_player_usecase.execute(&player_id).await;
                }
            }
            RouterCommand::Event { player_id, event } => {
                self.handle_event(player_id, event).await;
            }
            RouterCommand::Disconnect { player_id } => {
                if self
                    .disconnect_player_usecase
                    .execute(&player_id)
                    .await
                    .is_none()
                {
                    tracing::debug!("Disconnect for unknown player '{}' ignored", player_id);
                }
            }
        }
    }

    async fn handle_event(&self, player_id: PlayerId, event: ClientEvent) {
        tracing::debug!("Handling {:?} from '{}'", event, player_id);
        match event {
            ClientEvent::PlayerMovement(payload) => {
                self.move_player_usecase
                    .execute(&player_id, payload.into())
                    .await;
            }
            ClientEvent::PlayerShoot(payload) => {
                self.relay_combat_usecase
                    .shoot(payload.into_shot(player_id))
                    .await;
            }
            ClientEvent::PlayerReload(_) => {
                self.relay_combat_usecase.reload(&player_id).await;
            }
            ClientEvent::PlayerReloadComplete(_) => {
                self.relay_combat_usecase.reload_complete(&player_id).await;
            }
            ClientEvent::PlayerDead(payload) => {
                let killer = payload.killer_id.and_then(|id| PlayerId::new(id).ok());
                self.report_death_usecase.execute(&player_id, killer).await;
            }
            ClientEvent::PlayerRename(payload) => {
                self.rename_player_usecase
                    .execute(&player_id, &payload.name, payload.ack)
                    .await;
            }
            ClientEvent::PlayerPickupItem(item_id) => {
                self.pickup_item_usecase
                    .execute(&player_id, ItemId::new(item_id))
                    .await;
            }
        }
    }
}
