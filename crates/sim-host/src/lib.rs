pub mod adapters;
pub mod api;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod registry;

pub use adapters::registry::ToolRegistry;
pub use adapters::stateful::{FnTool, StatefulTool};
pub use adapters::traits::SyntheticTool;
pub use config::HostConfig;
pub use dispatch::{Augmentation, EffectDispatcher};
pub use error::HostError;
pub use registry::{SessionHandle, SessionId, SessionRegistry, SharedStore, global};

pub use sim_effects::{Effect, ToolArgs, ToolCategory};
pub use sim_store::{SessionStore, StoreSeed};
