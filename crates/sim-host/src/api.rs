//! Caller-facing operations bound to the current session of the process-wide
//! registry. Mock tools that need state without going through a
//! [`crate::StatefulTool`] use these directly.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use sim_effects::ToolArgs;
use sim_store::{GameStats, MemoryRecord, OrderRecord, UserProfile};

use crate::dispatch::EffectDispatcher;
use crate::error::HostError;
use crate::registry::{SessionHandle, global};

/// Starts a fresh session and makes it current for the calling thread.
/// Every later call on this thread sees only that session's state, until the
/// next `init_session` or [`release_session`].
pub fn init_session() -> SessionHandle {
    let registry = global();
    let session = registry.init_session();
    registry.activate(&session);
    session
}

/// Detaches the calling thread from its activated session; later calls fall
/// back to the default session.
pub fn release_session() -> Option<SessionHandle> {
    global().deactivate()
}

/// Runs `f` inside a newly initialized session.
pub fn with_session<R>(f: impl FnOnce(&SessionHandle) -> R) -> R {
    global().run_session(f)
}

pub fn current() -> SessionHandle {
    global().current()
}

pub fn read_file(path: &str) -> Option<String> {
    current().with(|s| s.files.read(path).map(str::to_string))
}

pub fn write_file(path: &str, content: &str) {
    current().with_mut(|s| s.files.write(path, content));
}

pub fn delete_file(path: &str) -> bool {
    current().with_mut(|s| s.files.delete(path))
}

pub fn list_files(prefix: &str) -> Vec<String> {
    current().with(|s| s.files.list(prefix))
}

pub fn print_env() -> IndexMap<String, String> {
    current().with(|s| s.env.vars().clone())
}

pub fn get_inventory() -> Vec<String> {
    current().with(|s| s.inventory.items().to_vec())
}

pub fn add_item(item: &str) {
    current().with_mut(|s| s.inventory.add(item));
}

pub fn get_game_stats() -> GameStats {
    current().with(|s| s.inventory.stats())
}

pub fn post_content(text: &str) {
    current().with_mut(|s| s.social.post(text));
}

pub fn get_feed() -> Vec<String> {
    current().with(|s| s.social.feed().to_vec())
}

pub fn get_user_profile() -> UserProfile {
    current().with(|s| s.social.profile())
}

pub fn add_memory(text: &str) -> u64 {
    current().with_mut(|s| s.memory.add(text))
}

pub fn search_memories(query: &str) -> Vec<MemoryRecord> {
    current().with(|s| s.memory.search(query))
}

pub fn checkout() -> Result<OrderRecord, HostError> {
    Ok(current().with_mut(|s| s.commerce.checkout())?)
}

/// Best-effort augmentation of `result` with the standard dispatcher.
pub fn augment(tool_name: &str, args: &ToolArgs, result: Map<String, Value>) -> Map<String, Value> {
    EffectDispatcher::default().augment(&current(), tool_name, args, result)
}
