//! UseCase 層
//!
//! インバウンドの操作ごとに一つのユースケースを持つ。
//! 各ユースケースは `WorldRepository` と `MessagePusher` の trait にのみ依存する。

pub mod connect_player;
pub mod disconnect_player;
pub mod error;
pub mod get_world_state;
pub mod move_player;
pub mod pickup_item;
pub mod relay_combat;
pub mod rename_player;
pub mod report_death;

#[cfg(test)]
pub(crate) mod test_support;

pub use connect_player::ConnectPlayerUseCase;
pub use disconnect_player::DisconnectPlayerUseCase;
pub use error::ConnectError;
pub use get_world_state::GetWorldStateUseCase;
pub use move_player::MovePlayerUseCase;
pub use pickup_item::PickupItemUseCase;
pub use relay_combat::RelayCombatUseCase;
pub use rename_player::RenamePlayerUseCase;
pub use report_death::ReportDeathUseCase;
