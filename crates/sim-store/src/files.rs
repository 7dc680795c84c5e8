use indexmap::IndexMap;
use serde::Serialize;

/// Simulated filesystem: path to content, in first-write order.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct FileDomain {
    files: IndexMap<String, String>,
}

impl FileDomain {
    /// `None` for a path that was never written (or was deleted).
    pub fn read(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn write(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Returns whether the path existed.
    pub fn delete(&mut self, path: &str) -> bool {
        self.files.shift_remove(path).is_some()
    }

    /// Paths starting with `prefix`; an empty prefix lists everything.
    pub fn list(&self, prefix: &str) -> Vec<String> {
        self.files
            .keys()
            .filter(|path| path.starts_with(prefix))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
