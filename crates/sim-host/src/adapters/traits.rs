use serde_json::{Map, Value};
use sim_effects::{ToolArgs, ToolCategory};

/// Builds a tool's baseline response from its arguments alone.
///
/// `synthesize` must be deterministic and must not touch session state; all
/// side effects happen in the augmentation stage.
pub trait SyntheticTool: Send + Sync {
    fn name(&self) -> &str;

    /// Catalog category. `None` applies every domain group.
    fn category(&self) -> Option<ToolCategory> {
        None
    }

    fn synthesize(&self, args: &ToolArgs) -> Map<String, Value>;
}

impl<T: SyntheticTool + ?Sized> SyntheticTool for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn category(&self) -> Option<ToolCategory> {
        (**self).category()
    }

    fn synthesize(&self, args: &ToolArgs) -> Map<String, Value> {
        (**self).synthesize(args)
    }
}
