//! UseCase: プレイヤー名の変更
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RenamePlayerUseCase::execute() メソッド
//! - 名前の検証（空文字・重複）と、リクエストしたクライアントへの結果通知
//!
//! ### なぜこのテストが必要か
//! - 名前の一意性は処理順で決まる（先着順）。二番目の要求は必ず失敗する
//! - 結果はリクエストしたクライアントにだけ返し、他のプレイヤーには何も送らない
//!
//! ### どのような状況を想定しているか
//! - 正常系：前後の空白を除いた名前で変更される
//! - 異常系：空の名前、使用中の名前、存在しないプレイヤー

use std::sync::Arc;

use crate::domain::{GameEvent, MessagePusher, PlayerId, PlayerName, RenameError, WorldRepository};

/// 名前変更のユースケース
pub struct RenamePlayerUseCase {
    repository: Arc<dyn WorldRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl RenamePlayerUseCase {
    pub fn new(
        repository: Arc<dyn WorldRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 名前を変更し、結果をリクエストしたクライアントに返す
    ///
    /// 成否は `playerRenameResult` としてリクエストしたクライアントにだけ届く。
    ///
    /// # Arguments
    ///
    /// * `player_id` - リクエストしたプレイヤー
    /// * `raw_name` - クライアントから受け取った名前（未加工）
    /// * `ack` - 結果に付与する相関番号
    pub async fn execute(
        &self,
        player_id: &PlayerId,
        raw_name: &str,
        ack: Option<u64>,
    ) {
        let result = match PlayerName::new(raw_name) {
            Ok(name) => self.repository.rename_player(player_id, name).await,
            Err(_) => Err(RenameError::EmptyName),
        };

        match &result {
            Ok(session) => tracing::info!("Player '{}' renamed to '{}'", player_id, session.name),
            Err(e) => tracing::debug!("Rename rejected for '{}': {}", player_id, e),
        }

        let reply = GameEvent::RenameResult {
            ack,
            outcome: result.map(|_| ()),
        };
        if let Err(e) = self.message_pusher.push_to(player_id, &reply).await {
            tracing::warn!("Failed to reply to rename from '{}': {}", player_id, e);
        }
    }
}
