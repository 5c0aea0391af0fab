//! Item catalog and instance id generation.

use std::{
    collections::BTreeMap,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use rand::Rng;
use skirmish_shared::time::{Clock, SystemClock};

use super::{
    entity::{ItemInstance, ItemTemplate, Placement},
    value_object::ItemId,
};

/// Upper bound (exclusive) of the random jitter added to the timestamp.
const ID_JITTER: u64 = 1000;

/// Issues item ids from the current time plus random jitter.
///
/// Ids are strictly increasing: a candidate that does not exceed the last
/// issued id is bumped to `last + 1`.
pub struct ItemIdGenerator {
    clock: Arc<dyn Clock>,
    last: AtomicU64,
}

impl ItemIdGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            last: AtomicU64::new(0),
        }
    }

    pub fn next_id(&self) -> ItemId {
        let now = u64::try_from(self.clock.now_millis()).unwrap_or_default();
        let candidate = now + rand::thread_rng().gen_range(0..ID_JITTER);
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(candidate.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        ItemId::new(candidate.max(previous + 1))
    }
}

impl Default for ItemIdGenerator {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

/// Read-only item templates keyed by label.
pub struct ItemCatalog {
    templates: BTreeMap<String, ItemTemplate>,
    ids: ItemIdGenerator,
}

impl ItemCatalog {
    pub fn new(templates: BTreeMap<String, ItemTemplate>, ids: ItemIdGenerator) -> Self {
        Self { templates, ids }
    }

    pub fn get(&self, label: &str) -> Option<&ItemTemplate> {
        self.templates.get(label)
    }

    /// Labels in a stable order.
    pub fn labels(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Stamp a fresh copy of the template at `position`.
    pub fn instantiate(&self, label: &str, position: Placement) -> Option<ItemInstance> {
        let template = self.templates.get(label)?;
        Some(ItemInstance {
            id: self.ids.next_id(),
            label: label.to_string(),
            position,
            template: template.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::{ItemKind, PassiveStats, Rarity};
    use skirmish_shared::time::FixedClock;

    fn helmet() -> ItemTemplate {
        ItemTemplate {
            name: "Tactical Helmet".to_string(),
            icon: "mdi:hard-hat".to_string(),
            quantity: None,
            durability: Some(80),
            rarity: Rarity::Uncommon,
            slot_type: Some("helmet".to_string()),
            kind: ItemKind::Passive(PassiveStats {
                effects: BTreeMap::from([("headshotProtection".to_string(), 0.5)]),
            }),
        }
    }

    fn fixed_catalog() -> ItemCatalog {
        let templates = BTreeMap::from([("tactical_helmet".to_string(), helmet())]);
        let ids = ItemIdGenerator::new(Arc::new(FixedClock::new(1_700_000_000_000)));
        ItemCatalog::new(templates, ids)
    }

    #[test]
    fn test_ids_are_unique_under_fixed_clock() {
        // テスト項目: 時刻が同じでも発行される ID は重複しない
        // given (前提条件):
        let ids = ItemIdGenerator::new(Arc::new(FixedClock::new(1_000)));

        // when (操作):
        let issued: Vec<ItemId> = (0..500).map(|_| ids.next_id()).collect();

        // then (期待する結果):
        for pair in issued.windows(2) {
            assert!(pair[1] > pair[0]);
        }
        assert!(issued[0].value() >= 1_000);
    }

    #[test]
    fn test_instantiate_copies_template() {
        // テスト項目: インスタンスはテンプレートの値コピーで、位置とラベルが設定される
        // given (前提条件):
        let catalog = fixed_catalog();
        let position = Placement {
            x: 10.0,
            y: 20.0,
            rotation: Some(45.0),
        };

        // when (操作):
        let instance = catalog.instantiate("tactical_helmet", position).unwrap();

        // then (期待する結果):
        assert_eq!(instance.label, "tactical_helmet");
        assert_eq!(instance.position, position);
        assert_eq!(&instance.template, catalog.get("tactical_helmet").unwrap());
    }

    #[test]
    fn test_instantiate_gives_fresh_id_per_call() {
        // テスト項目: 同じラベルでも生成のたびに新しい ID が付与される
        // given (前提条件):
        let catalog = fixed_catalog();
        let position = Placement {
            x: 0.0,
            y: 0.0,
            rotation: None,
        };

        // when (操作):
        let first = catalog.instantiate("tactical_helmet", position).unwrap();
        let second = catalog.instantiate("tactical_helmet", position).unwrap();

        // then (期待する結果):
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_len_counts_templates() {
        // テスト項目: len / is_empty はテンプレートの数を反映する
        // given (前提条件):
        let empty = ItemCatalog::new(BTreeMap::new(), ItemIdGenerator::default());

        // when (操作):
        let catalog = fixed_catalog();

        // then (期待する結果):
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_instantiate_unknown_label() {
        // テスト項目: 未知のラベルではインスタンスが生成されない
        // given (前提条件):
        let catalog = fixed_catalog();

        // when (操作):
        let instance = catalog.instantiate(
            "laser_cannon",
            Placement {
                x: 0.0,
                y: 0.0,
                rotation: None,
            },
        );

        // then (期待する結果):
        assert!(instance.is_none());
    }
}
