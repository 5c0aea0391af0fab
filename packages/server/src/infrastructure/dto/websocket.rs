//! WebSocket message DTOs.
//!
//! Every frame is a JSON envelope `{"event": "<name>", "data": <payload>}`.
//! `data` is omitted when the event carries no payload.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::ItemInstance;

// ========================================
// Client → Server
// ========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientEvent {
    PlayerMovement(MovementPayload),
    PlayerShoot(ShootPayload),
    PlayerReload(Option<ReloadPayload>),
    PlayerReloadComplete(Option<ReloadPayload>),
    PlayerDead(PlayerDeadPayload),
    PlayerRename(RenamePayload),
    PlayerPickupItem(u64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementPayload {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub is_reloading: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShootPayload {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub ammo: u32,
}

/// Reload timing sent by some clients. The relay carries only the sender's id,
/// so any fields are accepted and dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReloadPayload {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDeadPayload {
    /// `null` or missing when the death had no killer.
    #[serde(default)]
    pub killer_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenamePayload {
    pub name: String,
    /// Correlation number echoed back in `playerRenameResult`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ack: Option<u64>,
}

// ========================================
// Server → Client
// ========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    Init(InitPayload),
    NewPlayer(PlayerInfo),
    PlayerMoved(PlayerInfo),
    PlayerShoot(ShotInfo),
    PlayerReload(String),
    PlayerReloadComplete(String),
    PlayerDead(PlayerDeadInfo),
    PlayerPickupItem(u64),
    PlayerDisconnected(String),
    PlayerRenameResult(RenameResultInfo),
}

/// Public view of a player session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    pub is_reloading: bool,
    pub kills: u32,
    pub deaths: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitPayload {
    /// Id assigned to the receiving connection
    pub id: String,
    /// Player id → session
    pub players: BTreeMap<String, PlayerInfo>,
    pub items_on_ground: Vec<ItemInstance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotInfo {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub ammo: u32,
    pub id: String,
}

/// `{killerId, killerName, ...victim}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDeadInfo {
    pub killer_id: Option<String>,
    pub killer_name: Option<String>,
    #[serde(flatten)]
    pub player: PlayerInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenameResultInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ack: Option<u64>,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
