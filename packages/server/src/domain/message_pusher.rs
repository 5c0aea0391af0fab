//! MessagePusher trait 定義
//!
//! クライアントへのイベント送信を抽象化します。
//! 送信は fire-and-forget で、再送や到達確認は行いません。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{GameEvent, MessagePushError, PlayerId};

/// クライアントの送信キュー（エンコード済みのフレーム）
pub type PusherChannel = mpsc::UnboundedSender<String>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// クライアントの送信キューを登録
    async fn register_client(&self, player_id: PlayerId, sender: PusherChannel);

    /// クライアントの送信キューを登録解除
    async fn unregister_client(&self, player_id: &PlayerId);

    /// 特定のクライアントにイベントを送信
    async fn push_to(&self, player_id: &PlayerId, event: &GameEvent)
    -> Result<(), MessagePushError>;

    /// 複数のクライアントにイベントを送信（一部の送信失敗は許容）
    async fn broadcast(
        &self,
        targets: Vec<PlayerId>,
        event: &GameEvent,
    ) -> Result<(), MessagePushError>;
}
