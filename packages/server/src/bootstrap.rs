//! Dependency wiring.
//!
//! Initialize dependencies in order:
//! 1. Item catalog and ground items
//! 2. Repository
//! 3. MessagePusher
//! 4. UseCases
//! 5. EventRouter and Server

use std::{collections::HashMap, sync::Arc};

use thiserror::Error;
use tokio::sync::Mutex;

use crate::{
    config::{ConfigError, ServerConfig},
    domain::{
        GroundItemPool, ItemCatalog, ItemIdGenerator, ItemInstance, MapBounds,
        RandomSpawnPointPicker, RepositoryError, SpawnPointPicker, World, spawn_ground_items,
    },
    infrastructure::{
        catalog::{CatalogError, load_catalog},
        message_pusher::WebSocketMessagePusher,
        repository::InMemoryWorldRepository,
    },
    ui::{EventRouter, Server},
    usecase::{
        ConnectPlayerUseCase, DisconnectPlayerUseCase, GetWorldStateUseCase, MovePlayerUseCase,
        PickupItemUseCase, RelayCombatUseCase, RenamePlayerUseCase, ReportDeathUseCase,
    },
};

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Invalid ground items: {0}")]
    GroundItems(#[from] RepositoryError),
}

/// Build a server from configuration: load the catalog, scatter the initial
/// ground items and wire everything together.
pub fn build_server(config: &ServerConfig) -> Result<Server, BootstrapError> {
    let layout = config.layout()?;
    let templates = load_catalog(config.catalog.as_deref())?;
    let catalog = ItemCatalog::new(templates, ItemIdGenerator::default());
    let items = spawn_ground_items(&mut rand::thread_rng(), &catalog, &layout);
    tracing::info!(
        "World is {}x{} with {} items on the ground from {} catalog entries",
        layout.bounds.width(),
        layout.bounds.height(),
        items.len(),
        catalog.len()
    );

    build_server_with(layout.bounds, items, Arc::new(RandomSpawnPointPicker))
}

/// Build a server around a given set of ground items and spawn point picker.
pub fn build_server_with(
    bounds: MapBounds,
    items: Vec<ItemInstance>,
    spawn_picker: Arc<dyn SpawnPointPicker>,
) -> Result<Server, BootstrapError> {
    // 2. Create Repository (in-memory world)
    let world = Arc::new(Mutex::new(World::new(GroundItemPool::with_items(items)?)));
    let repository = Arc::new(InMemoryWorldRepository::new(world));

    // 3. Create MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(
        HashMap::new(),
    ))));

    // 4. Create UseCases
    let connect_player_usecase = Arc::new(ConnectPlayerUseCase::new(
        repository.clone(),
        message_pusher.clone(),
        spawn_picker.clone(),
        bounds,
    ));
    let disconnect_player_usecase = Arc::new(DisconnectPlayerUseCase::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let move_player_usecase = Arc::new(MovePlayerUseCase::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let relay_combat_usecase = Arc::new(RelayCombatUseCase::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let report_death_usecase = Arc::new(ReportDeathUseCase::new(
        repository.clone(),
        message_pusher.clone(),
        spawn_picker,
        bounds,
    ));
    let rename_player_usecase = Arc::new(RenamePlayerUseCase::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let pickup_item_usecase = Arc::new(PickupItemUseCase::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let get_world_state_usecase = Arc::new(GetWorldStateUseCase::new(repository));

    // 5. Create the event router and the server
    let event_router = EventRouter::new(
        connect_player_usecase,
        disconnect_player_usecase,
        move_player_usecase,
        relay_combat_usecase,
        report_death_usecase,
        rename_player_usecase,
        pickup_item_usecase,
    );
    Ok(Server::new(event_router, get_world_state_usecase))
}
