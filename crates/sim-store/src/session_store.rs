use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{CommerceDomain, EnvDomain, FileDomain, InventoryDomain, MemoryDomain, SocialDomain};

/// Baseline applied to every freshly created [`SessionStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSeed {
    pub inventory: Vec<String>,
    pub stock: IndexMap<String, i64>,
    pub env: IndexMap<String, String>,
    pub social_handle: String,
}

impl Default for StoreSeed {
    fn default() -> Self {
        Self {
            inventory: Vec::new(),
            stock: IndexMap::new(),
            env: IndexMap::new(),
            social_handle: "sim_user".into(),
        }
    }
}

/// All simulated backend state of one session. Stores never reference each
/// other; a new store starts from the seed and nothing else.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SessionStore {
    pub files: FileDomain,
    pub env: EnvDomain,
    pub inventory: InventoryDomain,
    pub social: SocialDomain,
    pub memory: MemoryDomain,
    pub commerce: CommerceDomain,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(&StoreSeed::default())
    }
}

impl SessionStore {
    pub fn new(seed: &StoreSeed) -> Self {
        Self {
            files: FileDomain::default(),
            env: EnvDomain::new(&seed.env),
            inventory: InventoryDomain::new(&seed.inventory),
            social: SocialDomain::new(seed.social_handle.clone()),
            memory: MemoryDomain::default(),
            commerce: CommerceDomain::new(&seed.stock),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_store_is_empty() {
        let store = SessionStore::default();
        assert!(store.files.is_empty());
        assert!(store.inventory.items().is_empty());
        assert!(store.social.feed().is_empty());
        assert!(store.memory.records().is_empty());
        assert_eq!(store.commerce.user_count(), 0);
        assert!(store.commerce.cart().is_empty());
        assert!(store.env.vars().is_empty());
    }

    #[test]
    fn seed_sets_baseline() {
        let seed: StoreSeed = serde_json::from_value(json!({
            "inventory": ["starter_kit"],
            "stock": {"A": 7},
            "env": {"HOME": "/home/sim"},
        }))
        .unwrap();
        assert_eq!(seed.social_handle, "sim_user");

        let store = SessionStore::new(&seed);
        assert_eq!(store.inventory.items(), ["starter_kit"]);
        assert_eq!(store.commerce.stock_of("A"), 7);
        assert_eq!(store.env.get("HOME"), Some("/home/sim"));
    }

    #[test]
    fn stores_from_same_seed_are_independent() {
        let seed = StoreSeed::default();
        let mut a = SessionStore::new(&seed);
        let b = SessionStore::new(&seed);
        a.files.write("f", "x");
        a.inventory.add("sword");
        assert_eq!(b.files.read("f"), None);
        assert!(b.inventory.items().is_empty());
    }

    #[test]
    fn snapshot_serializes() {
        let mut store = SessionStore::default();
        store.social.post("hello");
        let value = serde_json::to_value(&store).unwrap();
        assert_eq!(value["social"]["feed"], json!(["hello"]));
        assert_eq!(value["files"]["files"], json!({}));
    }
}
