use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::HostConfig;

/// Installs a fmt subscriber filtered by `config.log_filter`.
///
/// Fails if the filter does not parse or a global subscriber is already set.
pub fn init(config: &HostConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("parse log filter '{}'", config.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .try_init()
        .map_err(|err| anyhow!("install tracing subscriber: {err}"))
}
