use serde::{Deserialize, Serialize};
use sim_store::StoreSeed;

use crate::error::HostError;

pub const ENV_MAX_SESSIONS: &str = "SIM_MAX_SESSIONS";
pub const ENV_INVENTORY_SEED: &str = "SIM_INVENTORY_SEED";
pub const ENV_SOCIAL_HANDLE: &str = "SIM_SOCIAL_HANDLE";
pub const ENV_LOG: &str = "SIM_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Baseline every new session starts from.
    pub seed: StoreSeed,
    /// Upper bound on live sessions; the oldest is evicted past it. None is unbounded.
    pub max_sessions: Option<usize>,
    /// `EnvFilter` directive used by [`crate::logging::init`].
    pub log_filter: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            seed: StoreSeed::default(),
            max_sessions: None,
            log_filter: "info".into(),
        }
    }
}

impl HostConfig {
    /// Build from process environment variables over the defaults.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup; unset variables keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MAX_SESSIONS) {
            let max = raw.trim().parse::<usize>().map_err(|err| HostError::Config {
                var: ENV_MAX_SESSIONS,
                value: raw.clone(),
                reason: err.to_string(),
            })?;
            if max == 0 {
                return Err(HostError::Config {
                    var: ENV_MAX_SESSIONS,
                    value: raw,
                    reason: "must be at least 1".into(),
                });
            }
            config.max_sessions = Some(max);
        }

        if let Some(raw) = lookup(ENV_INVENTORY_SEED) {
            config.seed.inventory = raw
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(handle) = lookup(ENV_SOCIAL_HANDLE).filter(|h| !h.trim().is_empty()) {
            config.seed.social_handle = handle.trim().to_string();
        }

        if let Some(filter) = lookup(ENV_LOG).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}
