use std::collections::HashMap;

use serde_json::{Map, Value};
use sim_effects::ToolArgs;

use super::stateful::StatefulTool;
use super::traits::SyntheticTool;
use crate::error::HostError;
use crate::registry::SessionRegistry;

/// Named collection of stateful tools sharing one session registry.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, StatefulTool<Box<dyn SyntheticTool>>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool under its own name, replacing any previous entry.
    pub fn register(&mut self, tool: impl SyntheticTool + 'static) {
        let boxed: Box<dyn SyntheticTool> = Box::new(tool);
        self.tools
            .insert(boxed.name().to_string(), StatefulTool::new(boxed));
    }

    pub fn get(&self, name: &str) -> Option<&StatefulTool<Box<dyn SyntheticTool>>> {
        self.tools.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn call(
        &self,
        sessions: &SessionRegistry,
        name: &str,
        args: &ToolArgs,
    ) -> Result<Map<String, Value>, HostError> {
        let tool = self
            .get(name)
            .ok_or_else(|| HostError::UnknownTool(name.to_string()))?;
        Ok(tool.call(sessions, args))
    }
}
