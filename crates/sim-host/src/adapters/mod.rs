//! Two-stage tool adapters: a pure synthetic-response builder followed by
//! state augmentation against the current session.

pub mod registry;
pub mod stateful;
pub mod traits;
