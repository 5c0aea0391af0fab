//! UseCase 層のエラー定義

use thiserror::Error;

/// 参加者接続のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// 同じ ID のプレイヤーが既に接続している
    #[error("Player '{0}' is already connected")]
    DuplicatePlayerId(String),
}
