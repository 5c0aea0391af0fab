//! Repository trait 定義
//!
//! ドメイン層が必要とするワールド状態へのアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! 各メソッドは一回の呼び出しの中で検査と更新を完結させます。
//! 例えば `pick_up_item` は「アイテムがまだ地面にあるか」の確認と削除を
//! 分割せずに行うため、同じアイテムへの二つの拾得要求のうち成功するのは一つだけです。

use async_trait::async_trait;

use super::{
    DeathRecord, ItemInstance, ItemId, Movement, PlayerId, PlayerName, PlayerSession, Position,
    RenameError, RepositoryError, WorldSnapshot,
};

/// World Repository trait
///
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
#[async_trait]
pub trait WorldRepository: Send + Sync {
    /// セッションを登録し、登録後のスナップショットを返す
    async fn add_player(&self, session: PlayerSession) -> Result<WorldSnapshot, RepositoryError>;

    /// セッションを削除（存在しない場合は `None`）
    async fn remove_player(&self, id: &PlayerId) -> Option<PlayerSession>;

    /// セッションを取得
    async fn get_player(&self, id: &PlayerId) -> Option<PlayerSession>;

    /// 移動を反映し、更新後のセッションを返す
    async fn apply_movement(&self, id: &PlayerId, movement: Movement) -> Option<PlayerSession>;

    /// 死亡を記録し、被害者をリスポーンさせる
    async fn record_death(
        &self,
        victim: &PlayerId,
        killer: Option<&PlayerId>,
        respawn_at: Position,
    ) -> Option<DeathRecord>;

    /// 名前を変更（一意性を検査）
    async fn rename_player(
        &self,
        id: &PlayerId,
        name: PlayerName,
    ) -> Result<PlayerSession, RenameError>;

    /// 地面のアイテムを拾得（プールから取り除く）
    async fn pick_up_item(&self, player: &PlayerId, item: ItemId) -> Option<ItemInstance>;

    /// 現在のワールド全体のスナップショット
    async fn snapshot(&self) -> WorldSnapshot;

    /// 接続中の全てのプレイヤー ID を取得
    async fn get_all_player_ids(&self) -> Vec<PlayerId>;

    /// 接続中のプレイヤー数
    async fn count_players(&self) -> usize;

    /// 地面に残っているアイテム数
    async fn count_ground_items(&self) -> usize;
}
