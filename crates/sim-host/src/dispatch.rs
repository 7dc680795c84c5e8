//! Applies classified effects to a session store and folds read results back
//! into a tool's synthetic response.
//!
//! [`EffectDispatcher::augment`] is the outer boundary: a call that fails
//! classification is logged and the caller gets its response back untouched.
//! Classification validates every argument, so applying effects cannot fail.

use serde_json::{Map, Value};
use sim_effects::{ClassifyError, Classifier, Effect, EffectKind, ToolArgs, ToolCategory};
use sim_store::SessionStore;
use tracing::{debug, warn};

use crate::registry::SessionHandle;

/// Partial response produced by read effects, merged over the synthetic result.
pub type Augmentation = Map<String, Value>;

pub const CONTENT_KEY: &str = "content";
pub const INVENTORY_KEY: &str = "inventory";

#[derive(Debug, Clone, Default)]
pub struct EffectDispatcher {
    classifier: Classifier,
}

impl EffectDispatcher {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    pub fn for_category(category: ToolCategory) -> Self {
        Self::new(Classifier::for_category(category))
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn classify(&self, tool_name: &str, args: &ToolArgs) -> Result<Vec<Effect>, ClassifyError> {
        self.classifier.classify(tool_name, args)
    }

    /// Applies `effects` in order. Later reads overwrite keys set by earlier ones.
    pub fn apply(&self, store: &mut SessionStore, effects: &[Effect]) -> Augmentation {
        let mut out = Augmentation::new();
        for effect in effects {
            match effect {
                Effect::WriteFile { path, content } => {
                    store.files.write(path.as_str(), content.as_str());
                }
                Effect::ReadFile { path } => {
                    if let Some(content) = store.files.read(path) {
                        out.insert(CONTENT_KEY.into(), Value::String(content.to_string()));
                    }
                }
                Effect::AddInventoryItem { item } => {
                    store.inventory.add(item.as_str());
                }
                Effect::GetInventory => {
                    let items = Value::Array(
                        store
                            .inventory
                            .items()
                            .iter()
                            .cloned()
                            .map(Value::String)
                            .collect(),
                    );
                    out.insert(CONTENT_KEY.into(), Value::String(items.to_string()));
                    out.insert(INVENTORY_KEY.into(), items);
                }
                Effect::PostContent { text } => {
                    store.social.post(text.as_str());
                }
                Effect::GetFeed => {
                    let feed = store.social.feed();
                    if !feed.is_empty() {
                        out.insert(
                            CONTENT_KEY.into(),
                            Value::Array(feed.iter().cloned().map(Value::String).collect()),
                        );
                    }
                }
            }
        }
        out
    }

    /// Classifies the call and applies it to `store`.
    pub fn dispatch(
        &self,
        store: &mut SessionStore,
        tool_name: &str,
        args: &ToolArgs,
    ) -> Result<Augmentation, ClassifyError> {
        let effects = self.classify(tool_name, args)?;
        if !effects.is_empty() {
            let kinds: Vec<EffectKind> = effects.iter().map(Effect::kind).collect();
            let mut domains: Vec<&str> = kinds.iter().map(EffectKind::domain).collect();
            domains.dedup();
            debug!(tool = tool_name, ?domains, effects = ?kinds, "classified tool call");
        }
        Ok(self.apply(store, &effects))
    }

    /// Runs the call against `session` and merges the outcome into `result`.
    /// Never fails: if the call cannot be classified `result` comes back unchanged.
    pub fn augment(
        &self,
        session: &SessionHandle,
        tool_name: &str,
        args: &ToolArgs,
        mut result: Map<String, Value>,
    ) -> Map<String, Value> {
        match session.with_mut(|store| self.dispatch(store, tool_name, args)) {
            Ok(augmentation) => {
                result.extend(augmentation);
                result
            }
            Err(err) => {
                warn!(
                    tool = tool_name,
                    session = %session.id(),
                    error = %err,
                    "state augmentation skipped"
                );
                result
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> ToolArgs {
        ToolArgs::from_value(value).unwrap()
    }

    #[test]
    fn read_of_unwritten_path_adds_nothing() {
        let dispatcher = EffectDispatcher::default();
        let mut store = SessionStore::default();
        let out = dispatcher.apply(&mut store, &[Effect::read_file("nope.txt")]);
        assert!(out.is_empty());
    }

    #[test]
    fn write_then_read_in_one_batch() {
        let dispatcher = EffectDispatcher::default();
        let mut store = SessionStore::default();
        let out = dispatcher.apply(
            &mut store,
            &[Effect::write_file("a.txt", "alpha"), Effect::read_file("a.txt")],
        );
        assert_eq!(out.get(CONTENT_KEY), Some(&json!("alpha")));
    }

    #[test]
    fn inventory_is_reported_structured_and_as_text() {
        let dispatcher = EffectDispatcher::default();
        let mut store = SessionStore::default();
        let out = dispatcher
            .dispatch(&mut store, "buy_and_show_inventory", &args(json!({"item": "bow"})))
            .unwrap();
        assert_eq!(out.get(INVENTORY_KEY), Some(&json!(["bow"])));
        assert_eq!(out.get(CONTENT_KEY), Some(&json!(r#"["bow"]"#)));
    }

    #[test]
    fn empty_inventory_is_still_reported() {
        let dispatcher = EffectDispatcher::default();
        let mut store = SessionStore::default();
        let out = dispatcher.apply(&mut store, &[Effect::GetInventory]);
        assert_eq!(out.get(INVENTORY_KEY), Some(&json!([])));
        assert_eq!(out.get(CONTENT_KEY), Some(&json!("[]")));
    }

    #[test]
    fn empty_feed_adds_nothing() {
        let dispatcher = EffectDispatcher::default();
        let mut store = SessionStore::default();
        let out = dispatcher.apply(&mut store, &[Effect::GetFeed]);
        assert!(out.is_empty());

        store.social.post("hi");
        let out = dispatcher.apply(&mut store, &[Effect::GetFeed]);
        assert_eq!(out.get(CONTENT_KEY), Some(&json!(["hi"])));
    }

    #[test]
    fn classification_fault_surfaces_from_dispatch() {
        let dispatcher = EffectDispatcher::default();
        let mut store = SessionStore::default();
        let err = dispatcher
            .dispatch(&mut store, "write_file", &args(json!({"path": 3, "content": "x"})))
            .unwrap_err();
        assert!(matches!(err, ClassifyError::ArgType { .. }));
        assert!(store.files.is_empty());
    }
}
