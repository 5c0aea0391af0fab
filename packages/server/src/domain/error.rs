//! Domain errors.

use thiserror::Error;

/// 値オブジェクトの検証エラー
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueObjectError {
    #[error("Player id must not be empty")]
    EmptyPlayerId,

    #[error("Player name must not be empty")]
    EmptyPlayerName,

    #[error("Map bounds must be positive and finite (got {width}x{height})")]
    InvalidMapBounds { width: f64, height: f64 },
}

/// Rename rejection reasons. The display text is what the requester sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenameError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Name is already taken")]
    NameTaken,

    #[error("Player not found")]
    PlayerNotFound,
}

/// Repository（ワールド状態）の操作エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Player '{0}' is already registered")]
    DuplicatePlayer(String),

    #[error("Item {0} is already on the ground")]
    DuplicateItem(u64),
}

/// メッセージ送信のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("Client '{0}' not found")]
    ClientNotFound(String),

    #[error("Failed to push message: {0}")]
    PushFailed(String),

    #[error("Failed to encode event: {0}")]
    Encode(String),
}
