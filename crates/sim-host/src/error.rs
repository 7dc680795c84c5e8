use sim_store::CommerceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("invalid value '{value}' for {var}: {reason}")]
    Config {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("commerce error: {0}")]
    Commerce(#[from] CommerceError),
    #[error("no tool registered under '{0}'")]
    UnknownTool(String),
}
