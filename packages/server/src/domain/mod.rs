//! Domain layer: game state, invariants and the ports the outer layers implement.

pub mod catalog;
pub mod entity;
pub mod error;
pub mod event;
pub mod message_pusher;
pub mod repository;
pub mod spawn;
pub mod value_object;
pub mod world;

pub use catalog::{ItemCatalog, ItemIdGenerator};
pub use entity::{
    ActiveStats, DeployableStats, ItemInstance, ItemKind, ItemTemplate, MeleeWeaponStats,
    Movement, PassiveStats, Placement, PlayerSession, RangedWeaponStats, Rarity, Shot,
    SpecialStats, ThrowableStats,
};
pub use error::{MessagePushError, RenameError, RepositoryError, ValueObjectError};
pub use event::GameEvent;
pub use message_pusher::{MessagePusher, PusherChannel};
pub use repository::WorldRepository;
pub use spawn::{
    FixedSpawnPointPicker, GroundItemLayout, RandomSpawnPointPicker, SpawnPointPicker,
    spawn_ground_items,
};
pub use value_object::{ItemId, MapBounds, PlayerId, PlayerIdFactory, PlayerName, Position};
pub use world::{DeathRecord, GroundItemPool, SessionRegistry, World, WorldSnapshot};

#[cfg(test)]
pub use message_pusher::MockMessagePusher;
