use serde::{Deserialize, Serialize};

use crate::EffectKind;

/// A domain operation inferred from a tool call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    ReadFile { path: String },
    WriteFile { path: String, content: String },
    AddInventoryItem { item: String },
    GetInventory,
    PostContent { text: String },
    GetFeed,
}

impl Effect {
    pub fn read_file(path: impl Into<String>) -> Self {
        Effect::ReadFile { path: path.into() }
    }

    pub fn write_file(path: impl Into<String>, content: impl Into<String>) -> Self {
        Effect::WriteFile {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn add_inventory_item(item: impl Into<String>) -> Self {
        Effect::AddInventoryItem { item: item.into() }
    }

    pub fn post_content(text: impl Into<String>) -> Self {
        Effect::PostContent { text: text.into() }
    }

    pub fn kind(&self) -> EffectKind {
        let name = match self {
            Effect::ReadFile { .. } => EffectKind::FILE_READ,
            Effect::WriteFile { .. } => EffectKind::FILE_WRITE,
            Effect::AddInventoryItem { .. } => EffectKind::INVENTORY_ADD,
            Effect::GetInventory => EffectKind::INVENTORY_GET,
            Effect::PostContent { .. } => EffectKind::SOCIAL_POST,
            Effect::GetFeed => EffectKind::SOCIAL_FEED,
        };
        EffectKind::new(name)
    }
}
