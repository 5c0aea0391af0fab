//! Spawn points for players and the initial ground item layout.

use rand::Rng;

use super::{
    catalog::ItemCatalog,
    entity::{ItemInstance, Placement},
    value_object::{MapBounds, Position},
};

/// Picks where a player (re)spawns.
pub trait SpawnPointPicker: Send + Sync {
    fn pick(&self, bounds: &MapBounds) -> Position;
}

/// Uniformly random point within the map bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSpawnPointPicker;

impl SpawnPointPicker for RandomSpawnPointPicker {
    fn pick(&self, bounds: &MapBounds) -> Position {
        random_position(&mut rand::thread_rng(), bounds)
    }
}

/// Always the same point. Used by tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedSpawnPointPicker {
    position: Position,
}

impl FixedSpawnPointPicker {
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

impl SpawnPointPicker for FixedSpawnPointPicker {
    fn pick(&self, _bounds: &MapBounds) -> Position {
        self.position
    }
}

fn random_position<R: Rng + ?Sized>(rng: &mut R, bounds: &MapBounds) -> Position {
    Position::new(
        rng.gen_range(0.0..=bounds.width()),
        rng.gen_range(0.0..=bounds.height()),
    )
}

/// How many ground items to spawn and where.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundItemLayout {
    pub min_items: usize,
    pub max_items: usize,
    pub bounds: MapBounds,
}

/// Instantiate between `min_items` and `max_items` random catalog entries at
/// random placements. Labels the catalog cannot instantiate are skipped.
pub fn spawn_ground_items<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &ItemCatalog,
    layout: &GroundItemLayout,
) -> Vec<ItemInstance> {
    if catalog.is_empty() {
        return Vec::new();
    }
    let labels = catalog.labels();

    let count = rng.gen_range(layout.min_items..=layout.max_items.max(layout.min_items));
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        let label = labels[rng.gen_range(0..labels.len())];
        let position = random_position(rng, &layout.bounds);
        let placement = Placement {
            x: position.x,
            y: position.y,
            rotation: Some(rng.gen_range(0.0..360.0)),
        };
        if let Some(item) = catalog.instantiate(label, placement) {
            items.push(item);
        }
    }

    tracing::debug!(
        "Spawned {} ground items from {} catalog entries",
        items.len(),
        catalog.len()
    );
    items
}

#[cfg(test)]
mod tests {
    use std::{
        collections::{BTreeMap, HashSet},
        sync::Arc,
    };

    use rand::{SeedableRng, rngs::StdRng};
    use skirmish_shared::time::FixedClock;

    use super::*;
    use crate::domain::{
        catalog::ItemIdGenerator,
        entity::{ItemKind, ItemTemplate, Rarity, ThrowableStats},
    };

    fn catalog() -> ItemCatalog {
        let grenade = ItemTemplate {
            name: "Spike Grenade".to_string(),
            icon: "game-icons:bundle-grenade".to_string(),
            quantity: Some(3),
            durability: None,
            rarity: Rarity::Uncommon,
            slot_type: None,
            kind: ItemKind::Throwable(ThrowableStats {
                damage: 40.0,
                throw_force: 18.0,
                explosion_radius: Some(4.5),
                fuse_time: Some(3.0),
                is_consumable: true,
            }),
        };
        let mut molotov = grenade.clone();
        molotov.name = "Molotov Cocktail".to_string();

        let templates = BTreeMap::from([
            ("spike_grenade".to_string(), grenade),
            ("molotov".to_string(), molotov),
        ]);
        ItemCatalog::new(
            templates,
            ItemIdGenerator::new(Arc::new(FixedClock::new(42))),
        )
    }

    fn layout(min_items: usize, max_items: usize) -> GroundItemLayout {
        GroundItemLayout {
            min_items,
            max_items,
            bounds: MapBounds::new(4000.0, 2000.0).unwrap(),
        }
    }

    #[test]
    fn test_spawn_count_within_range() {
        // テスト項目: 生成数が [min, max] の範囲に収まる
        // given (前提条件):
        let catalog = catalog();
        let layout = layout(64, 128);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);

            // when (操作):
            let items = spawn_ground_items(&mut rng, &catalog, &layout);

            // then (期待する結果):
            assert!((64..=128).contains(&items.len()), "got {}", items.len());
        }
    }

    #[test]
    fn test_spawned_items_are_within_bounds_with_unique_ids() {
        // テスト項目: 生成されたアイテムはマップ内に配置され、ID が一意である
        // given (前提条件):
        let catalog = catalog();
        let layout = layout(100, 100);
        let mut rng = StdRng::seed_from_u64(7);

        // when (操作):
        let items = spawn_ground_items(&mut rng, &catalog, &layout);

        // then (期待する結果):
        assert_eq!(items.len(), 100);
        let ids: HashSet<_> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), items.len());
        for item in &items {
            let position = Position::new(item.position.x, item.position.y);
            assert!(layout.bounds.contains(&position));
            let rotation = item.position.rotation.unwrap();
            assert!((0.0..360.0).contains(&rotation));
            assert!(catalog.get(&item.label).is_some());
        }
    }

    #[test]
    fn test_empty_catalog_spawns_nothing() {
        // テスト項目: カタログが空の場合は何も生成されない
        // given (前提条件):
        let catalog = ItemCatalog::new(BTreeMap::new(), ItemIdGenerator::default());
        let mut rng = StdRng::seed_from_u64(1);

        // when (操作):
        let items = spawn_ground_items(&mut rng, &catalog, &layout(1, 5));

        // then (期待する結果):
        assert!(items.is_empty());
    }

    #[test]
    fn test_random_spawn_point_is_within_bounds() {
        // テスト項目: ランダムなスポーン地点は常にマップ内にある
        // given (前提条件):
        let bounds = MapBounds::new(50.0, 10.0).unwrap();
        let picker = RandomSpawnPointPicker;

        for _ in 0..200 {
            // when (操作):
            let position = picker.pick(&bounds);

            // then (期待する結果):
            assert!(bounds.contains(&position));
        }
    }
}
