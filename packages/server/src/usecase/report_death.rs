//! UseCase: 死亡報告の処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ReportDeathUseCase::execute() メソッド
//! - 被害者の deaths 加算とリスポーン、キラーの kills 加算、playerDead の通知
//!
//! ### なぜこのテストが必要か
//! - キル・デスの集計はクライアントの報告だけが根拠であり、
//!   キラーが不在でも死亡自体は記録されなければならない
//!
//! ### どのような状況を想定しているか
//! - 正常系：キラーが接続中
//! - エッジケース：キラーが不在（killerName は null）
//! - エッジケース：自殺（キルは加算しない）
//! - エッジケース：被害者が存在しない（何もしない）

use std::sync::Arc;

use crate::domain::{
    DeathRecord, GameEvent, MapBounds, MessagePusher, PlayerId, SpawnPointPicker, WorldRepository,
};

/// 死亡報告のユースケース
pub struct ReportDeathUseCase {
    repository: Arc<dyn WorldRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    /// リスポーン位置の決定
    spawn_picker: Arc<dyn SpawnPointPicker>,
    bounds: MapBounds,
}

impl ReportDeathUseCase {
    pub fn new(
        repository: Arc<dyn WorldRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        spawn_picker: Arc<dyn SpawnPointPicker>,
        bounds: MapBounds,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            spawn_picker,
            bounds,
        }
    }

    /// 死亡を記録し、送信者を含む全員に playerDead を通知する
    ///
    /// # Arguments
    ///
    /// * `victim` - 死亡を報告したプレイヤー
    /// * `killer` - クライアントが報告したキラー（存在しない場合もある）
    ///
    /// # Returns
    ///
    /// * `Some(DeathRecord)` - 記録された死亡
    /// * `None` - 被害者のセッションが存在しない（通知なし）
    pub async fn execute(
        &self,
        victim: &PlayerId,
        killer: Option<PlayerId>,
    ) -> Option<DeathRecord> {
        let respawn_at = self.spawn_picker.pick(&self.bounds);
        let record = self
            .repository
            .record_death(victim, killer.as_ref(), respawn_at)
            .await?;

        match &record.killer_name {
            Some(name) => tracing::info!("'{}' was killed by '{}'", victim, name),
            None => tracing::info!("'{}' died", victim),
        }

        let targets = self.repository.get_all_player_ids().await;
        if let Err(e) = self
            .message_pusher
            .broadcast(targets, &GameEvent::PlayerDead(record.clone()))
            .await
        {
            tracing::warn!("Failed to broadcast playerDead for '{}': {}", victim, e);
        }

        Some(record)
    }
}
