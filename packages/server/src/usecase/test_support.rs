//! Fixtures shared by the use case tests.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, mpsc};

use crate::{
    domain::{
        ActiveStats, GroundItemPool, ItemId, ItemInstance, ItemKind, ItemTemplate, MapBounds,
        MessagePusher, Placement, PlayerId, PlayerSession, Position, Rarity, World,
        WorldRepository,
    },
    infrastructure::{
        dto::websocket::ServerEvent, message_pusher::WebSocketMessagePusher,
        repository::InMemoryWorldRepository,
    },
};

pub fn player_id(value: &str) -> PlayerId {
    PlayerId::new(value.to_string()).unwrap()
}

pub fn bounds() -> MapBounds {
    MapBounds::new(4000.0, 4000.0).unwrap()
}

pub fn ground_item(id: u64) -> ItemInstance {
    ItemInstance {
        id: ItemId::new(id),
        label: "medkit".to_string(),
        position: Placement {
            x: 10.0,
            y: 10.0,
            rotation: Some(0.0),
        },
        template: ItemTemplate {
            name: "Medkit".to_string(),
            icon: "mdi:medication".to_string(),
            quantity: Some(1),
            durability: None,
            rarity: Rarity::Uncommon,
            slot_type: None,
            kind: ItemKind::Active(ActiveStats {
                use_time: 3.0,
                cooldown: 10.0,
                effect: "restore 50 health".to_string(),
                is_consumable: true,
            }),
        },
    }
}

/// Repository whose ground pool holds items with ids `1..=item_count`.
pub fn create_test_repository(item_count: u64) -> Arc<InMemoryWorldRepository> {
    let items = (1..=item_count).map(ground_item).collect();
    let pool = GroundItemPool::with_items(items).unwrap();
    Arc::new(InMemoryWorldRepository::new(Arc::new(Mutex::new(
        World::new(pool),
    ))))
}

pub fn create_test_message_pusher() -> Arc<WebSocketMessagePusher> {
    Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(
        HashMap::new(),
    ))))
}

/// Seat a player directly and return the receiving end of its channel.
pub async fn join(
    repository: &InMemoryWorldRepository,
    pusher: &WebSocketMessagePusher,
    id: &str,
) -> mpsc::UnboundedReceiver<String> {
    repository
        .add_player(PlayerSession::spawn(player_id(id), Position::new(1.0, 1.0)))
        .await
        .unwrap();
    let (tx, rx) = mpsc::unbounded_channel();
    pusher.register_client(player_id(id), tx).await;
    rx
}

/// All frames queued so far, decoded.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<String>) -> Vec<ServerEvent> {
    let mut events = Vec::new();
    while let Ok(frame) = rx.try_recv() {
        events.push(serde_json::from_str(&frame).unwrap());
    }
    events
}
