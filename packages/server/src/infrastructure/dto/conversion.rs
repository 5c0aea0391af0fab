//! Conversion logic between DTOs and domain types.

use crate::domain::{
    DeathRecord, GameEvent, Movement, PlayerId, PlayerSession, Position, Shot, WorldSnapshot,
};
use crate::infrastructure::dto::{http, websocket as dto};

// ========================================
// DTO → Domain
// ========================================

impl From<dto::MovementPayload> for Movement {
    fn from(payload: dto::MovementPayload) -> Self {
        Self {
            position: Position::new(payload.x, payload.y),
            rotation: payload.rotation,
            is_reloading: payload.is_reloading,
        }
    }
}

impl dto::ShootPayload {
    pub fn into_shot(self, shooter: PlayerId) -> Shot {
        Shot {
            shooter,
            position: Position::new(self.x, self.y),
            rotation: self.rotation,
            ammo: self.ammo,
        }
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<&PlayerSession> for dto::PlayerInfo {
    fn from(session: &PlayerSession) -> Self {
        Self {
            id: session.id.as_str().to_string(),
            name: session.name.as_str().to_string(),
            x: session.position.x,
            y: session.position.y,
            rotation: session.rotation,
            is_reloading: session.is_reloading,
            kills: session.kills,
            deaths: session.deaths,
        }
    }
}

impl dto::InitPayload {
    pub fn new(player_id: &PlayerId, snapshot: &WorldSnapshot) -> Self {
        Self {
            id: player_id.as_str().to_string(),
            players: snapshot
                .players
                .iter()
                .map(|p| (p.id.as_str().to_string(), dto::PlayerInfo::from(p)))
                .collect(),
            items_on_ground: snapshot.items_on_ground.clone(),
        }
    }
}

impl From<WorldSnapshot> for http::WorldStateDto {
    fn from(snapshot: WorldSnapshot) -> Self {
        Self {
            players: snapshot.players.iter().map(dto::PlayerInfo::from).collect(),
            items_on_ground: snapshot.items_on_ground,
        }
    }
}

impl From<&Shot> for dto::ShotInfo {
    fn from(shot: &Shot) -> Self {
        Self {
            x: shot.position.x,
            y: shot.position.y,
            rotation: shot.rotation,
            ammo: shot.ammo,
            id: shot.shooter.as_str().to_string(),
        }
    }
}

impl From<&DeathRecord> for dto::PlayerDeadInfo {
    fn from(record: &DeathRecord) -> Self {
        Self {
            killer_id: record.killer_id.as_ref().map(|id| id.as_str().to_string()),
            killer_name: record
                .killer_name
                .as_ref()
                .map(|name| name.as_str().to_string()),
            player: dto::PlayerInfo::from(&record.victim),
        }
    }
}

impl From<&GameEvent> for dto::ServerEvent {
    fn from(event: &GameEvent) -> Self {
        match event {
            GameEvent::Init {
                player_id,
                snapshot,
            } => Self::Init(dto::InitPayload::new(player_id, snapshot)),
            GameEvent::NewPlayer(session) => Self::NewPlayer(session.into()),
            GameEvent::PlayerMoved(session) => Self::PlayerMoved(session.into()),
            GameEvent::PlayerShoot(shot) => Self::PlayerShoot(shot.into()),
            GameEvent::PlayerReload(id) => Self::PlayerReload(id.as_str().to_string()),
            GameEvent::PlayerReloadComplete(id) => {
                Self::PlayerReloadComplete(id.as_str().to_string())
            }
            GameEvent::PlayerDead(record) => Self::PlayerDead(record.into()),
            GameEvent::PlayerPickupItem(item_id) => Self::PlayerPickupItem(item_id.value()),
            GameEvent::PlayerDisconnected(id) => Self::PlayerDisconnected(id.as_str().to_string()),
            GameEvent::RenameResult { ack, outcome } => {
                Self::PlayerRenameResult(dto::RenameResultInfo {
                    ack: *ack,
                    success: outcome.is_ok(),
                    message: outcome.as_ref().err().map(ToString::to_string),
                })
            }
        }
    }
}
