//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{infrastructure::dto::http::WorldStateDto, ui::state::AppState};

/// Debug endpoint returning the authoritative world state
pub async fn debug_world_state(State(state): State<Arc<AppState>>) -> Json<WorldStateDto> {
    let snapshot = state.get_world_state_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(snapshot.into())
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}
