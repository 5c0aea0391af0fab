//! UseCase: プレイヤー切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectPlayerUseCase::execute() メソッド
//! - セッション削除と playerDisconnected の通知
//!
//! ### どのような状況を想定しているか
//! - 正常系：プレイヤーの切断と残りのプレイヤーへの通知
//! - エッジケース：最後のプレイヤーの切断（通知対象なし）
//! - エッジケース：既に削除されたプレイヤーの切断（冪等性）

use std::sync::Arc;

use crate::domain::{GameEvent, MessagePusher, PlayerId, WorldRepository};

/// プレイヤー切断のユースケース
pub struct DisconnectPlayerUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn WorldRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectPlayerUseCase {
    /// 新しい DisconnectPlayerUseCase を作成
    pub fn new(
        repository: Arc<dyn WorldRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// プレイヤー切断を実行
    ///
    /// # Returns
    ///
    /// * `Some(Vec<PlayerId>)` - 通知したプレイヤー ID リスト
    /// * `None` - セッションが既に存在しない（何もしない）
    pub async fn execute(&self, player_id: &PlayerId) -> Option<Vec<PlayerId>> {
        self.message_pusher.unregister_client(player_id).await;

        self.repository.remove_player(player_id).await?;
        let remaining = self.repository.get_all_player_ids().await;
        tracing::info!(
            "Player '{}' removed ({} remaining)",
            player_id,
            remaining.len()
        );

        if let Err(e) = self
            .message_pusher
            .broadcast(
                remaining.clone(),
                &GameEvent::PlayerDisconnected(player_id.clone()),
            )
            .await
        {
            tracing::warn!(
                "Failed to broadcast playerDisconnected for '{}': {}",
                player_id,
                e
            );
        }

        Some(remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::MockMessagePusher,
        infrastructure::dto::websocket::ServerEvent,
        usecase::test_support::{
            create_test_message_pusher, create_test_repository, drain, join, player_id,
        },
    };

    #[tokio::test]
    async fn test_disconnect_notifies_remaining_players() {
        // テスト項目: 切断したプレイヤーは削除され、残りのプレイヤーに通知される
        // given (前提条件):
        let repository = create_test_repository(0);
        let pusher = create_test_message_pusher();
        let mut p1_rx = join(&repository, &pusher, "p1").await;
        let mut p2_rx = join(&repository, &pusher, "p2").await;
        let usecase = DisconnectPlayerUseCase::new(repository.clone(), pusher.clone());

        // when (操作):
        let notified = usecase.execute(&player_id("p2")).await;

        // then (期待する結果):
        assert_eq!(notified, Some(vec![player_id("p1")]));
        assert_eq!(repository.count_players().await, 1);
        assert_eq!(
            drain(&mut p1_rx),
            vec![ServerEvent::PlayerDisconnected("p2".to_string())]
        );
        assert!(drain(&mut p2_rx).is_empty());
    }

    #[tokio::test]
    async fn test_disconnect_last_player() {
        // テスト項目: 最後のプレイヤーが切断しても問題なく処理される（通知対象なし）
        // given (前提条件):
        let repository = create_test_repository(0);
        let pusher = create_test_message_pusher();
        let _p1_rx = join(&repository, &pusher, "p1").await;
        let usecase = DisconnectPlayerUseCase::new(repository.clone(), pusher.clone());

        // when (操作):
        let notified = usecase.execute(&player_id("p1")).await;

        // then (期待する結果):
        assert_eq!(notified, Some(Vec::new()));
        assert_eq!(repository.count_players().await, 0);
    }

    #[tokio::test]
    async fn test_disconnect_absent_player_is_noop() {
        // テスト項目: 既に存在しないプレイヤーの切断はブロードキャストせず、エラーにもならない
        // given (前提条件):
        let repository = create_test_repository(0);
        let real_pusher = create_test_message_pusher();
        let _p1_rx = join(&repository, &real_pusher, "p1").await;

        let mut pusher = MockMessagePusher::new();
        pusher.expect_unregister_client().returning(|_| ());
        pusher.expect_broadcast().never();
        let usecase = DisconnectPlayerUseCase::new(repository.clone(), Arc::new(pusher));

        // when (操作):
        let notified = usecase.execute(&player_id("ghost")).await;

        // then (期待する結果):
        assert!(notified.is_none());
        assert_eq!(repository.count_players().await, 1);
    }
}
