use indexmap::IndexMap;
use serde::Serialize;

/// Player inventory. Append-only within a session; duplicates are kept.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct InventoryDomain {
    items: Vec<String>,
}

/// Aggregate view over the inventory.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct GameStats {
    pub total_items: usize,
    pub unique_items: usize,
    /// Count per item, in first-acquired order.
    pub counts: IndexMap<String, usize>,
}

impl InventoryDomain {
    pub fn new(seed: &[String]) -> Self {
        Self {
            items: seed.to_vec(),
        }
    }

    pub fn add(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn stats(&self) -> GameStats {
        let mut counts = IndexMap::new();
        for item in &self.items {
            *counts.entry(item.clone()).or_insert(0) += 1;
        }
        GameStats {
            total_items: self.items.len(),
            unique_items: counts.len(),
            counts,
        }
    }
}
