//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::ItemInstance;

use super::websocket::PlayerInfo;

/// Read-only view of the authoritative world state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldStateDto {
    pub players: Vec<PlayerInfo>,
    pub items_on_ground: Vec<ItemInstance>,
}
