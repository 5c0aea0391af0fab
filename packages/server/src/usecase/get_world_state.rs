//! UseCase: ワールド状態の取得（デバッグ用）

use std::sync::Arc;

use crate::domain::{WorldRepository, WorldSnapshot};

/// ワールド状態取得のユースケース
pub struct GetWorldStateUseCase {
    repository: Arc<dyn WorldRepository>,
}

impl GetWorldStateUseCase {
    pub fn new(repository: Arc<dyn WorldRepository>) -> Self {
        Self { repository }
    }

    /// 現在のセッションと地面のアイテムをまとめて返す
    pub async fn execute(&self) -> WorldSnapshot {
        self.repository.snapshot().await
    }
}
