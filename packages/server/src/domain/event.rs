//! Outbound game events.
//!
//! Use cases decide *what* happened and *who* hears about it; the message
//! pusher decides how it is encoded on the wire.

use super::{
    entity::{PlayerSession, Shot},
    error::RenameError,
    value_object::{ItemId, PlayerId},
    world::{DeathRecord, WorldSnapshot},
};

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Full state for a newly connected client, with the id it was assigned.
    Init {
        player_id: PlayerId,
        snapshot: WorldSnapshot,
    },
    NewPlayer(PlayerSession),
    PlayerMoved(PlayerSession),
    PlayerShoot(Shot),
    PlayerReload(PlayerId),
    PlayerReloadComplete(PlayerId),
    PlayerDead(DeathRecord),
    PlayerPickupItem(ItemId),
    PlayerDisconnected(PlayerId),
    /// Reply to a rename request, correlated by the client's `ack`.
    RenameResult {
        ack: Option<u64>,
        outcome: Result<(), RenameError>,
    },
}

impl GameEvent {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::Init { .. } => "init",
            GameEvent::NewPlayer(_) => "newPlayer",
            GameEvent::PlayerMoved(_) => "playerMoved",
            GameEvent::PlayerShoot(_) => "playerShoot",
            GameEvent::PlayerReload(_) => "playerReload",
            GameEvent::PlayerReloadComplete(_) => "playerReloadComplete",
            GameEvent::PlayerDead(_) => "playerDead",
            GameEvent::PlayerPickupItem(_) => "playerPickupItem",
            GameEvent::PlayerDisconnected(_) => "playerDisconnected",
            GameEvent::RenameResult { .. } => "playerRenameResult",
        }
    }
}
