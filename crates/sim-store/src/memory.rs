use serde::Serialize;

/// Notes stored by memory-management tools.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct MemoryDomain {
    records: Vec<MemoryRecord>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MemoryRecord {
    pub id: u64,
    pub text: String,
}

impl MemoryDomain {
    /// Stores a memory and returns its id; ids start at 1.
    pub fn add(&mut self, text: impl Into<String>) -> u64 {
        let id = self.records.len() as u64 + 1;
        self.records.push(MemoryRecord {
            id,
            text: text.into(),
        });
        id
    }

    /// Case-insensitive substring search, oldest match first.
    pub fn search(&self, query: &str) -> Vec<MemoryRecord> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.text.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn records(&self) -> &[MemoryRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_ignores_case() {
        let mut memory = MemoryDomain::default();
        assert_eq!(memory.add("User prefers Rust"), 1);
        assert_eq!(memory.add("meeting on friday"), 2);
        assert_eq!(memory.add("rust toolchain pinned"), 3);

        let hits: Vec<u64> = memory.search("RUST").into_iter().map(|r| r.id).collect();
        assert_eq!(hits, vec![1, 3]);
        assert!(memory.search("tuesday").is_empty());
    }
}
