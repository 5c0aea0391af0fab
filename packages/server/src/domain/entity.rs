//! Entities
//!
//! プレイヤーのセッションと、カタログのテンプレートから生成されるアイテム。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::value_object::{ItemId, PlayerId, PlayerName, Position};

/// 接続中プレイヤーの権威的な状態
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSession {
    pub id: PlayerId,
    pub name: PlayerName,
    pub position: Position,
    /// Radians. `None` until the first movement update.
    pub rotation: Option<f64>,
    pub is_reloading: bool,
    pub kills: u32,
    pub deaths: u32,
}

impl PlayerSession {
    /// Fresh session for a newly connected player.
    pub fn spawn(id: PlayerId, position: Position) -> Self {
        let name = PlayerName::placeholder(&id);
        Self {
            id,
            name,
            position,
            rotation: None,
            is_reloading: false,
            kills: 0,
            deaths: 0,
        }
    }

    pub fn apply_movement(&mut self, movement: Movement) {
        self.position = movement.position;
        self.rotation = Some(movement.rotation);
        self.is_reloading = movement.is_reloading;
    }

    pub fn register_death(&mut self, respawn_at: Position) {
        self.deaths += 1;
        self.position = respawn_at;
    }

    pub fn register_kill(&mut self) {
        self.kills += 1;
    }
}

/// Client-reported movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    pub position: Position,
    pub rotation: f64,
    pub is_reloading: bool,
}

/// Client-reported shot, relayed as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Shot {
    pub shooter: PlayerId,
    pub position: Position,
    pub rotation: f64,
    pub ammo: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangedWeaponStats {
    pub damage: f64,
    pub fire_rate: f64,
    pub reload_time: f64,
    pub magazine_size: u32,
    pub current_ammo: u32,
    pub max_range: f64,
    pub spread_angle: f64,
    pub projectile_speed: f64,
    pub ammo_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_automatic: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeleeWeaponStats {
    pub damage: f64,
    pub attack_rate: f64,
    pub range: f64,
    pub arc: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stamina_cost: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrowableStats {
    pub damage: f64,
    pub throw_force: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explosion_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuse_time: Option<f64>,
    pub is_consumable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployableStats {
    pub health: f64,
    pub deploy_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_passive: Option<bool>,
    pub is_blocking: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveStats {
    pub use_time: f64,
    pub cooldown: f64,
    pub effect: String,
    pub is_consumable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassiveStats {
    pub effects: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialStats {
    pub restrictions: BTreeMap<String, f64>,
    pub benefits: BTreeMap<String, f64>,
}

/// Kind-specific stats, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    RangedWeapon(RangedWeaponStats),
    MeleeWeapon(MeleeWeaponStats),
    Throwable(ThrowableStats),
    Deployable(DeployableStats),
    Active(ActiveStats),
    Passive(PassiveStats),
    Special(SpecialStats),
}

/// カタログ上のアイテム定義（読み取り専用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTemplate {
    pub name: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub durability: Option<u32>,
    pub rarity: Rarity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_type: Option<String>,
    #[serde(flatten)]
    pub kind: ItemKind,
}

/// Where an item lies on the ground. Rotation is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

/// A spawned copy of a catalog template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInstance {
    pub id: ItemId,
    pub label: String,
    pub position: Placement,
    #[serde(flatten)]
    pub template: ItemTemplate,
}
