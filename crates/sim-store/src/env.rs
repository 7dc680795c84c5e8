use indexmap::IndexMap;
use serde::Serialize;

/// Environment variables visible to simulated OS tools.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct EnvDomain {
    vars: IndexMap<String, String>,
}

impl EnvDomain {
    pub fn new(seed: &IndexMap<String, String>) -> Self {
        Self { vars: seed.clone() }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn vars(&self) -> &IndexMap<String, String> {
        &self.vars
    }
}
