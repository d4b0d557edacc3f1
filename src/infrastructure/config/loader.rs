//! Configuration loader using Figment for layered config management.
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. TOML config file
//! 3. Environment variables (COVAULT_* prefix)

use crate::foundation::QuorumError;
use crate::infrastructure::config::types::AppConfig;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable prefix for config overrides.
///
/// Example: `COVAULT_CHAIN__RPC_URL` -> `chain.rpc_url`
const ENV_PREFIX: &str = "COVAULT_";

const DEFAULT_CONFIG_FILE: &str = "covault.toml";

/// Load configuration from the default file in `data_dir` (`covault.toml`).
pub fn load_config(data_dir: &Path) -> Result<AppConfig, QuorumError> {
    load_config_from_file(&data_dir.join(DEFAULT_CONFIG_FILE))
}

/// Load configuration from a specific file path.
pub fn load_config_from_file(path: &Path) -> Result<AppConfig, QuorumError> {
    info!(path = %path.display(), "loading configuration");
    let figment = Figment::from(Serialized::defaults(AppConfig::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));
    let config: AppConfig =
        figment.extract().map_err(|e| QuorumError::ConfigError(format!("config extraction failed: {e}")))?;
    validate(&config)?;
    debug!(
        chain_id = config.chain.chain_id,
        relay_enabled = config.relay.enabled,
        gateway_url = %config.service.gateway_url,
        "configuration loaded"
    );
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<(), QuorumError> {
    if config.chain.chain_id == 0 {
        return Err(QuorumError::ConfigError("chain.chain_id is required".to_string()));
    }
    if config.relay.enabled && config.relay.url.trim().is_empty() {
        return Err(QuorumError::ConfigError("relay.url is required when relay.enabled = true".to_string()));
    }
    Ok(())
}
