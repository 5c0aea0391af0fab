//! UseCase: 戦闘イベントの中継
//!
//! 射撃・リロード開始・リロード完了はサーバー側の状態を変更せず、
//! 送信者 ID を付与して送信者を含む全員にそのまま中継する。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RelayCombatUseCase の shoot / reload / reload_complete
//!
//! ### どのような状況を想定しているか
//! - 正常系：送信者自身を含む全員に届く
//! - 正常系：ワールドの状態は変化しない

use std::sync::Arc;

use crate::domain::{GameEvent, MessagePusher, PlayerId, Shot, WorldRepository};

/// 戦闘イベント中継のユースケース
pub struct RelayCombatUseCase {
    repository: Arc<dyn WorldRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl RelayCombatUseCase {
    pub fn new(
        repository: Arc<dyn WorldRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 射撃を全員に中継
    pub async fn shoot(&self, shot: Shot) {
        self.relay(GameEvent::PlayerShoot(shot)).await;
    }

    /// リロード開始を全員に中継
    pub async fn reload(&self, player_id: &PlayerId) {
        self.relay(GameEvent::PlayerReload(player_id.clone())).await;
    }

    /// リロード完了を全員に中継
    pub async fn reload_complete(&self, player_id: &PlayerId) {
        self.relay(GameEvent::PlayerReloadComplete(player_id.clone()))
            .await;
    }

    async fn relay(&self, event: GameEvent) {
        let targets = self.repository.get_all_player_ids().await;
        if let Err(e) = self.message_pusher.broadcast(targets, &event).await {
            tracing::warn!("Failed to relay '{}': {}", event.name(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::Position,
        infrastructure::dto::websocket::{ServerEvent, ShotInfo},
        usecase::test_support::{
            create_test_message_pusher, create_test_repository, drain, join, player_id,
        },
    };

    #[tokio::test]
    async fn test_shot_is_relayed_to_everyone_including_sender() {
        // テスト項目: 射撃は送信者 ID 付きで送信者を含む全員に届く
        // given (前提条件):
        let repository = create_test_repository(0);
        let pusher = create_test_message_pusher();
        let mut p1_rx = join(&repository, &pusher, "p1").await;
        let mut p2_rx = join(&repository, &pusher, "p2").await;
        let usecase = RelayCombatUseCase::new(repository.clone(), pusher.clone());

        // when (操作):
        usecase
            .shoot(Shot {
                shooter: player_id("p1"),
                position: Position::new(3.0, 4.0),
                rotation: 1.25,
                ammo: 7,
            })
            .await;

        // then (期待する結果):
        let expected = vec![ServerEvent::PlayerShoot(ShotInfo {
            x: 3.0,
            y: 4.0,
            rotation: 1.25,
            ammo: 7,
            id: "p1".to_string(),
        })];
        assert_eq!(drain(&mut p1_rx), expected);
        assert_eq!(drain(&mut p2_rx), expected);
    }

    #[tokio::test]
    async fn test_reload_events_are_relayed_in_order() {
        // テスト項目: リロード開始・完了が順番通りに全員に届き、セッションは変更されない
        // given (前提条件):
        let repository = create_test_repository(0);
        let pusher = create_test_message_pusher();
        let mut p1_rx = join(&repository, &pusher, "p1").await;
        let mut p2_rx = join(&repository, &pusher, "p2").await;
        let before = repository.snapshot().await;
        let usecase = RelayCombatUseCase::new(repository.clone(), pusher.clone());

        // when (操作):
        usecase.reload(&player_id("p2")).await;
        usecase.reload_complete(&player_id("p2")).await;

        // then (期待する結果):
        let expected = vec![
            ServerEvent::PlayerReload("p2".to_string()),
            ServerEvent::PlayerReloadComplete("p2".to_string()),
        ];
        assert_eq!(drain(&mut p1_rx), expected);
        assert_eq!(drain(&mut p2_rx), expected);
        assert_eq!(repository.snapshot().await, before);
    }
}
