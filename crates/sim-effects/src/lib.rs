//! Effect variants, tool-argument probing and the table-driven classifier that
//! maps a tool call onto domain effects.

pub mod classify;

mod args;
mod intent;
mod kinds;

pub use args::{CallSite, ToolArgs};
pub use classify::{ClassifyError, Classifier, DomainGroup, Rule, RuleSubject, ToolCategory};
pub use intent::Effect;
pub use kinds::EffectKind;
