use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an effect kind (e.g., `file.read`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffectKind(String);

impl EffectKind {
    pub const FILE_READ: &'static str = "file.read";
    pub const FILE_WRITE: &'static str = "file.write";
    pub const INVENTORY_ADD: &'static str = "inventory.add";
    pub const INVENTORY_GET: &'static str = "inventory.get";
    pub const SOCIAL_POST: &'static str = "social.post";
    pub const SOCIAL_FEED: &'static str = "social.feed";

    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Domain prefix of the kind (`file`, `inventory`, `social`).
    pub fn domain(&self) -> &str {
        self.0.split('.').next().unwrap_or_default()
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
