//! Per-session simulated backend state: one record per domain, aggregated into
//! a [`SessionStore`].

mod commerce;
mod env;
mod files;
mod inventory;
mod memory;
mod session_store;
mod social;

pub use commerce::{CommerceDomain, CommerceError, OrderRecord, TokenRecord, UserRecord};
pub use env::EnvDomain;
pub use files::FileDomain;
pub use inventory::{GameStats, InventoryDomain};
pub use memory::{MemoryDomain, MemoryRecord};
pub use session_store::{SessionStore, StoreSeed};
pub use social::{SocialDomain, UserProfile};
