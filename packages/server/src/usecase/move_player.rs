//! UseCase: プレイヤー移動処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - MovePlayerUseCase::execute() メソッド
//! - 移動の反映と playerMoved のブロードキャスト（送信者を除く）
//!
//! ### どのような状況を想定しているか
//! - 正常系：移動した本人以外に playerMoved が届く
//! - エッジケース：存在しないプレイヤーの移動（何もしない）

use std::sync::Arc;

use crate::domain::{GameEvent, MessagePusher, Movement, PlayerId, PlayerSession, WorldRepository};

/// プレイヤー移動のユースケース
pub struct MovePlayerUseCase {
    repository: Arc<dyn WorldRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl MovePlayerUseCase {
    pub fn new(
        repository: Arc<dyn WorldRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 移動を反映し、送信者以外の全員に更新後のセッションを通知する
    ///
    /// セッションが存在しない場合は `None`（通知なし）
    pub async fn execute(&self, player_id: &PlayerId, movement: Movement) -> Option<PlayerSession> {
        let session = self.repository.apply_movement(player_id, movement).await?;

        let targets: Vec<PlayerId> = self
            .repository
            .get_all_player_ids()
            .await
            .into_iter()
            .filter(|id| id != player_id)
            .collect();
        if let Err(e) = self
            .message_pusher
            .broadcast(targets, &GameEvent::PlayerMoved(session.clone()))
            .await
        {
            tracing::warn!("Failed to broadcast playerMoved for '{}': {}", player_id, e);
        }

        Some(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::Position,
        infrastructure::dto::websocket::ServerEvent,
        usecase::test_support::{
            create_test_message_pusher, create_test_repository, drain, join, player_id,
        },
    };

    fn movement(x: f64, y: f64) -> Movement {
        Movement {
            position: Position::new(x, y),
            rotation: 0.75,
            is_reloading: true,
        }
    }

    #[tokio::test]
    async fn test_movement_is_echoed_to_others_only() {
        // テスト項目: 移動は他のプレイヤーにだけ通知され、送信者には返らない
        // given (前提条件):
        let repository = create_test_repository(0);
        let pusher = create_test_message_pusher();
        let mut p1_rx = join(&repository, &pusher, "p1").await;
        let mut p2_rx = join(&repository, &pusher, "p2").await;
        let usecase = MovePlayerUseCase::new(repository.clone(), pusher.clone());

        // when (操作):
        let session = usecase
            .execute(&player_id("p1"), movement(10.0, 20.0))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(session.position, Position::new(10.0, 20.0));
        assert_eq!(session.rotation, Some(0.75));
        assert!(session.is_reloading);
        assert!(drain(&mut p1_rx).is_empty());

        let p2_events = drain(&mut p2_rx);
        assert_eq!(p2_events.len(), 1);
        match &p2_events[0] {
            ServerEvent::PlayerMoved(player) => {
                assert_eq!(player.id, "p1");
                assert_eq!((player.x, player.y), (10.0, 20.0));
                assert!(player.is_reloading);
            }
            other => panic!("expected playerMoved, got {:?}", other),
        }

        let stored = repository.get_player(&player_id("p1")).await.unwrap();
        assert_eq!(stored.position, Position::new(10.0, 20.0));
    }

    #[tokio::test]
    async fn test_movement_of_unknown_player_is_ignored() {
        // テスト項目: 存在しないプレイヤーの移動は無視され、誰にも通知されない
        // given (前提条件):
        let repository = create_test_repository(0);
        let pusher = create_test_message_pusher();
        let mut p1_rx = join(&repository, &pusher, "p1").await;
        let usecase = MovePlayerUseCase::new(repository.clone(), pusher.clone());

        // when (操作):
        let result = usecase
            .execute(&player_id("ghost"), movement(5.0, 5.0))
            .await;

        // then (期待する結果):
        assert!(result.is_none());
        assert!(drain(&mut p1_rx).is_empty());
    }
}
