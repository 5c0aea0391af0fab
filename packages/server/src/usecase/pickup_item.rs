//! UseCase: 地面のアイテムの拾得
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PickupItemUseCase::execute() メソッド
//! - アイテムのプールからの削除と playerPickupItem の通知
//!
//! ### なぜこのテストが必要か
//! - 同じアイテムの二重拾得を防ぐ（アイテムの保存則）
//!
//! ### どのような状況を想定しているか
//! - 正常系：地面にあるアイテムの拾得
//! - エッジケース：既に拾われたアイテム、存在しないアイテム（通知なし）
//! - エッジケース：存在しないプレイヤーからの拾得（通知なし）

use std::sync::Arc;

use crate::domain::{GameEvent, ItemId, ItemInstance, MessagePusher, PlayerId, WorldRepository};

/// アイテム拾得のユースケース
pub struct PickupItemUseCase {
    repository: Arc<dyn WorldRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl PickupItemUseCase {
    pub fn new(
        repository: Arc<dyn WorldRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// アイテムを拾得し、成功した場合のみ送信者を含む全員に通知する
    pub async fn execute(&self, player_id: &PlayerId, item_id: ItemId) -> Option<ItemInstance> {
        let Some(item) = self.repository.pick_up_item(player_id, item_id).await else {
            tracing::debug!(
                "Pickup of item {} by '{}' ignored (not on the ground)",
                item_id,
                player_id
            );
            return None;
        };
        tracing::debug!("'{}' picked up {} ({})", player_id, item.label, item_id);

        let targets = self.repository.get_all_player_ids().await;
        if let Err(e) = self
            .message_pusher
            .broadcast(targets, &GameEvent::PlayerPickupItem(item_id))
            .await
        {
            tracing::warn!("Failed to broadcast playerPickupItem {}: {}", item_id, e);
        }

        Some(item)
    }
}
