//! InMemory World Repository 実装
//!
//! ドメイン層が定義する WorldRepository trait の具体的な実装。
//! `World` 集約を Mutex で保護し、インメモリ DB として使用します。
//! 永続化は行わないため、サーバーの再起動で状態は失われます。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    DeathRecord, ItemId, ItemInstance, Movement, PlayerId, PlayerName, PlayerSession, Position,
    RenameError, RepositoryError, World, WorldRepository, WorldSnapshot,
};

/// インメモリ World Repository 実装
pub struct InMemoryWorldRepository {
    /// World ドメインモデル
    world: Arc<Mutex<World>>,
}

impl InMemoryWorldRepository {
    /// 新しい InMemoryWorldRepository を作成
    pub fn new(world: Arc<Mutex<World>>) -> Self {
        Self { world }
    }
}

#[async_trait]
impl WorldRepository for InMemoryWorldRepository {
    async fn add_player(&self, session: PlayerSession) -> Result<WorldSnapshot, RepositoryError> {
        let mut world = self.world.lock().await;
        world.join(session)?;
        Ok(world.snapshot())
    }

    async fn remove_player(&self, id: &PlayerId) -> Option<PlayerSession> {
        let mut world = self.world.lock().await;
        world.leave(id)
    }

    async fn get_player(&self, id: &PlayerId) -> Option<PlayerSession> {
        let world = self.world.lock().await;
        world.sessions().get(id).cloned()
    }

    async fn apply_movement(&self, id: &PlayerId, movement: Movement) -> Option<PlayerSession> {
        let mut world = self.world.lock().await;
        world.apply_movement(id, movement)
    }

    async fn record_death(
        &self,
        victim: &PlayerId,
        killer: Option<&PlayerId>,
        respawn_at: Position,
    ) -> Option<DeathRecord> {
        let mut world = self.world.lock().await;
        world.record_death(victim, killer, respawn_at)
    }

    async fn rename_player(
        &self,
        id: &PlayerId,
        name: PlayerName,
    ) -> Result<PlayerSession, RenameError> {
        let mut world = self.world.lock().await;
        world.rename(id, name)
    }

    async fn pick_up_item(&self, player: &PlayerId, item: ItemId) -> Option<ItemInstance> {
        let mut world = self.world.lock().await;
        world.pick_up(player, item)
    }

    async fn snapshot(&self) -> WorldSnapshot {
        let world = self.world.lock().await;
        world.snapshot()
    }

    async fn get_all_player_ids(&self) -> Vec<PlayerId> {
        let world = self.world.lock().await;
        world.sessions().ids()
    }

    async fn count_players(&self) -> usize {
        let world = self.world.lock().await;
        world.sessions().len()
    }

    async fn count_ground_items(&self) -> usize {
        let world = self.world.lock().await;
        world.ground_items().len()
    }
}
