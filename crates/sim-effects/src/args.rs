use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ClassifyError;

/// Keyword arguments of a tool call, as an ordered JSON object.
///
/// Lookups through [`ToolArgs::present`] follow the truthiness rules the mock
/// tools were written against: `null`, `false`, `0`, and empty strings, arrays
/// or objects count as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolArgs(Map<String, Value>);

impl ToolArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a JSON object; any other value yields `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Raw lookup, including falsy values.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Lookup that treats falsy values as missing.
    pub fn present(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| is_truthy(value))
    }

    /// First key in `keys` holding a truthy value, in preference order.
    pub fn first_present<'k>(&self, keys: &[&'k str]) -> Option<(&'k str, &Value)> {
        keys.iter()
            .find_map(|key| self.present(key).map(|value| (*key, value)))
    }

    /// Present value that must be a string.
    pub fn present_str(&self, key: &str) -> Result<Option<&str>, ClassifyError> {
        match self.present(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(ClassifyError::ArgType {
                arg: key.to_string(),
                expected: "string",
                found: json_type_name(other),
            }),
        }
    }

    /// First present text-like value; non-string values render as compact JSON.
    pub fn first_text(&self, keys: &[&str]) -> Option<String> {
        self.first_present(keys).map(|(_, value)| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ToolArgs {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ToolArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The two strings a tool call is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub tool_name: &'a str,
    /// `command` argument when it is a non-empty string, else the tool name.
    pub command: &'a str,
}

impl<'a> CallSite<'a> {
    pub fn new(tool_name: &'a str, args: &'a ToolArgs) -> Result<Self, ClassifyError> {
        let command = match args.present("command") {
            None => tool_name,
            Some(Value::String(cmd)) => cmd.as_str(),
            Some(other) => {
                return Err(ClassifyError::ArgType {
                    arg: "command".into(),
                    expected: "string",
                    found: json_type_name(other),
                });
            }
        };
        Ok(Self { tool_name, command })
    }
}
