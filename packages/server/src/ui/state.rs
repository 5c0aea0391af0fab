//! Shared application state for the axum handlers.

use std::sync::Arc;

use crate::usecase::GetWorldStateUseCase;

use super::router::RouterHandle;

pub struct AppState {
    /// Handle to the single-writer event router
    pub router: RouterHandle,
    /// GetWorldStateUseCase（ワールド状態取得のユースケース）
    pub get_world_state_usecase: Arc<GetWorldStateUseCase>,
}
