use serde_json::{Map, Value};
use sim_effects::{ToolArgs, ToolCategory};

use super::traits::SyntheticTool;
use crate::dispatch::EffectDispatcher;
use crate::registry::{SessionHandle, SessionRegistry};

/// Wraps a [`SyntheticTool`] so every call is augmented with session state.
pub struct StatefulTool<T> {
    tool: T,
    dispatcher: EffectDispatcher,
}

impl<T: SyntheticTool> StatefulTool<T> {
    pub fn new(tool: T) -> Self {
        let dispatcher = match tool.category() {
            Some(category) => EffectDispatcher::for_category(category),
            None => EffectDispatcher::default(),
        };
        Self { tool, dispatcher }
    }

    pub fn with_dispatcher(tool: T, dispatcher: EffectDispatcher) -> Self {
        Self { tool, dispatcher }
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }

    pub fn name(&self) -> &str {
        self.tool.name()
    }

    /// Calls the tool against the registry's current session.
    pub fn call(&self, registry: &SessionRegistry, args: &ToolArgs) -> Map<String, Value> {
        self.call_in(&registry.current(), args)
    }

    pub fn call_in(&self, session: &SessionHandle, args: &ToolArgs) -> Map<String, Value> {
        let result = self.tool.synthesize(args);
        self.dispatcher
            .augment(session, self.tool.name(), args, result)
    }
}

/// [`SyntheticTool`] backed by a closure.
pub struct FnTool<F> {
    name: String,
    category: Option<ToolCategory>,
    synthesize: F,
}

impl<F> FnTool<F>
where
    F: Fn(&ToolArgs) -> Map<String, Value> + Send + Sync,
{
    pub fn new(name: impl Into<String>, synthesize: F) -> Self {
        Self {
            name: name.into(),
            category: None,
            synthesize,
        }
    }

    pub fn with_category(mut self, category: ToolCategory) -> Self {
        self.category = Some(category);
        self
    }
}

impl<F> SyntheticTool for FnTool<F>
where
    F: Fn(&ToolArgs) -> Map<String, Value> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Option<ToolCategory> {
        self.category
    }

    fn synthesize(&self, args: &ToolArgs) -> Map<String, Value> {
        (self.synthesize)(args)
    }
}
