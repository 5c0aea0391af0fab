//! World aggregate
//!
//! セッションレジストリと地面アイテムプールを一つの集約として保持します。
//! すべての不変条件（ID の一意性、名前の一意性、アイテムの保存則）はここで守られます。

use std::collections::HashMap;

use super::{
    entity::{ItemInstance, Movement, PlayerSession},
    error::{RenameError, RepositoryError},
    value_object::{ItemId, PlayerId, PlayerName, Position},
};

/// Connection id → session. One entry per live connection.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: HashMap<PlayerId, PlayerSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, session: PlayerSession) -> Result<(), RepositoryError> {
        if self.sessions.contains_key(&session.id) {
            return Err(RepositoryError::DuplicatePlayer(
                session.id.as_str().to_string(),
            ));
        }
        self.sessions.insert(session.id.clone(), session);
        Ok(())
    }

    pub fn remove(&mut self, id: &PlayerId) -> Option<PlayerSession> {
        self.sessions.remove(id)
    }

    pub fn get(&self, id: &PlayerId) -> Option<&PlayerSession> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &PlayerId) -> Option<&mut PlayerSession> {
        self.sessions.get_mut(id)
    }

    pub fn contains(&self, id: &PlayerId) -> bool {
        self.sessions.contains_key(id)
    }

    pub fn is_name_taken(&self, name: &PlayerName) -> bool {
        self.sessions.values().any(|session| &session.name == name)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn ids(&self) -> Vec<PlayerId> {
        self.sessions.keys().cloned().collect()
    }

    /// Sessions sorted by id for consistent ordering.
    pub fn sorted(&self) -> Vec<PlayerSession> {
        let mut sessions: Vec<PlayerSession> = self.sessions.values().cloned().collect();
        sessions.sort_by(|a, b| a.id.cmp(&b.id));
        sessions
    }
}

/// Items lying in the world, in spawn order.
#[derive(Debug, Clone, Default)]
pub struct GroundItemPool {
    items: Vec<ItemInstance>,
}

impl GroundItemPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool, rejecting duplicate ids.
    pub fn with_items(items: Vec<ItemInstance>) -> Result<Self, RepositoryError> {
        let mut pool = Self::new();
        for item in items {
            pool.place(item)?;
        }
        Ok(pool)
    }

    pub fn place(&mut self, item: ItemInstance) -> Result<(), RepositoryError> {
        if self.contains(item.id) {
            return Err(RepositoryError::DuplicateItem(item.id.value()));
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the item, if it is still on the ground.
    pub fn take(&mut self, id: ItemId) -> Option<ItemInstance> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn items(&self) -> &[ItemInstance] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Full state handed to a newly connected client.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldSnapshot {
    pub players: Vec<PlayerSession>,
    pub items_on_ground: Vec<ItemInstance>,
}

/// Outcome of a reported death.
#[derive(Debug, Clone, PartialEq)]
pub struct DeathRecord {
    pub victim: PlayerSession,
    /// Killer id as reported by the victim's client.
    pub killer_id: Option<PlayerId>,
    /// Set only when the killer is an active session and was credited.
    pub killer_name: Option<PlayerName>,
}

/// ゲームワールドの集約ルート
#[derive(Debug, Clone, Default)]
pub struct World {
    sessions: SessionRegistry,
    ground_items: GroundItemPool,
}

impl World {
    pub fn new(ground_items: GroundItemPool) -> Self {
        Self {
            sessions: SessionRegistry::new(),
            ground_items,
        }
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    pub fn ground_items(&self) -> &GroundItemPool {
        &self.ground_items
    }

    pub fn join(&mut self, session: PlayerSession) -> Result<(), RepositoryError> {
        self.sessions.insert(session)
    }

    pub fn leave(&mut self, id: &PlayerId) -> Option<PlayerSession> {
        self.sessions.remove(id)
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            players: self.sessions.sorted(),
            items_on_ground: self.ground_items.items().to_vec(),
        }
    }

    pub fn apply_movement(&mut self, id: &PlayerId, movement: Movement) -> Option<PlayerSession> {
        let session = self.sessions.get_mut(id)?;
        session.apply_movement(movement);
        Some(session.clone())
    }

    /// Count a death for `victim` and credit `killer` if it is another active session.
    pub fn record_death(
        &mut self,
        victim: &PlayerId,
        killer: Option<&PlayerId>,
        respawn_at: Position,
    ) -> Option<DeathRecord> {
        self.sessions.get_mut(victim)?.register_death(respawn_at);

        // A self-reported suicide is not a kill.
        let killer_name = match killer.filter(|killer| *killer != victim) {
            Some(killer_id) => self.sessions.get_mut(killer_id).map(|killer| {
                killer.register_kill();
                killer.name.clone()
            }),
            None => None,
        };

        let victim = self.sessions.get(victim)?.clone();
        Some(DeathRecord {
            victim,
            killer_id: killer.cloned(),
            killer_name,
        })
    }

    /// Rename a session. Names are compared after trimming and must be unique
    /// among all active sessions, including the requester's current name.
    pub fn rename(&mut self, id: &PlayerId, name: PlayerName) -> Result<PlayerSession, RenameError> {
        if self.sessions.is_name_taken(&name) {
            return Err(RenameError::NameTaken);
        }
        let session = self
            .sessions
            .get_mut(id)
            .ok_or(RenameError::PlayerNotFound)?;
        session.name = name;
        Ok(session.clone())
    }

    /// Hand an item to `player`. `None` when the player is gone or the item
    /// is no longer on the ground.
    pub fn pick_up(&mut self, player: &PlayerId, item: ItemId) -> Option<ItemInstance> {
        if !self.sessions.contains(player) {
            return None;
        }
        self.ground_items.take(item)
    }
}
