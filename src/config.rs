//! Provider configuration from the environment (and an optional `.env` file)
use crate::constants::{DEFAULT_TIMEOUT_SECS, ENV_ENTRYPOINT, ENV_TIMEOUT_SECS, ENV_TOKEN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API Platform entrypoint, e.g. `https://api.example.com/api`
    pub entrypoint: String,
    /// Bearer token sent with every request
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Config {
    /// Load `.env` if present, then read `HYDRA_*` variables;
    /// values from `overrides` (command-line flags) take precedence
    pub fn from_env_with<F>(overrides: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("[Config] No .env loaded: {}", e);
        }
        Self::from_lookup(|key| overrides(key).or_else(|| std::env::var(key).ok()))
    }

    /// Build from any key -> value source; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let entrypoint = get(ENV_ENTRYPOINT).ok_or_else(|| format!("{} must be set", ENV_ENTRYPOINT))?;

        let timeout_secs = match get(ENV_TIMEOUT_SECS) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| format!("{} must be a number of seconds: {}", ENV_TIMEOUT_SECS, e))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            entrypoint,
            token: get(ENV_TOKEN),
            timeout_secs,
        })
    }
}
