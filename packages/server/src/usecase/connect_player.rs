//! UseCase: プレイヤー接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectPlayerUseCase::execute() メソッド
//! - セッション作成、init スナップショットの送信、newPlayer のブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - init は唯一の全状態転送であり、欠落や重複があってはならない
//! - newPlayer は新規プレイヤー本人には送られてはならない
//!
//! ### どのような状況を想定しているか
//! - 正常系：最初のプレイヤー、二人目のプレイヤーの接続
//! - 異常系：重複した ID での接続試行

use std::sync::Arc;

use crate::domain::{
    GameEvent, MapBounds, MessagePusher, PlayerId, PlayerSession, PusherChannel,
    SpawnPointPicker, WorldRepository,
};

use super::error::ConnectError;

/// プレイヤー接続のユースケース
pub struct ConnectPlayerUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn WorldRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// 初期位置の決定
    spawn_picker: Arc<dyn SpawnPointPicker>,
    bounds: MapBounds,
}

impl ConnectPlayerUseCase {
    /// 新しい ConnectPlayerUseCase を作成
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

    /// プレイヤー接続を実行
    ///
    /// 1. ランダムな位置と仮の名前でセッションを作成し、登録する
    /// 2. 新規プレイヤーにだけ init（全プレイヤーと地面アイテム）を送信する
    /// 3. 他の全プレイヤーに newPlayer をブロードキャストする
    ///
    /// # Arguments
    ///
    /// * `player_id` - 接続 ID（Domain Model）
    /// * `sender` - クライアントへの送信キュー
    ///
    /// # Returns
    ///
    /// * `Ok(PlayerSession)` - 作成されたセッション
    /// * `Err(ConnectError)` - 接続失敗
    pub async fn execute(
        &self,
        player_id: PlayerId,
        sender: PusherChannel,
    ) -> Result<PlayerSession, ConnectError> {
        // 1. セッションを登録（登録後のスナップショットを同時に取得）
        let session = PlayerSession::spawn(player_id.clone(), self.spawn_picker.pick(&self.bounds));
        let snapshot = self
            .repository
            .add_player(session.clone())
            .await
            .map_err(|_| ConnectError::DuplicatePlayerId(player_id.as_str().to_string()))?;

        // 2. init を新規プレイヤーにだけ送信
        self.message_pusher
            .register_client(player_id.clone(), sender)
            .await;
        let player_count = snapshot.players.len();
        let item_count = snapshot.items_on_ground.len();
        if let Err(e) = self
            .message_pusher
            .push_to(
                &player_id,
                &GameEvent::Init {
                    player_id: player_id.clone(),
                    snapshot,
                },
            )
            .await
        {
            tracing::warn!("Failed to send init to '{}': {}", player_id, e);
        } else {
            tracing::debug!(
                "Sent init to '{}' ({} players, {} items)",
                player_id,
                player_count,
                item_count
            );
        }

        // 3. 他の全プレイヤーに newPlayer をブロードキャスト
        let targets: Vec<PlayerId> = self
            .repository
            .get_all_player_ids()
            .await
            .into_iter()
            .filter(|id| id != &player_id)
            .collect();
        if let Err(e) = self
            .message_pusher
            .broadcast(targets, &GameEvent::NewPlayer(session.clone()))
            .await
        {
            tracing::warn!("Failed to broadcast newPlayer for '{}': {}", player_id, e);
        }

        Ok(session)
    }
}
