use crate::domain::model::ProviderHandle;
use serde::{Deserialize, Serialize};

/// Base configuration for a host process embedding the orchestrator.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Proposal backend base URL.
    #[serde(default)]
    pub gateway_url: String,
    #[serde(default)]
    pub data_dir: String,
    /// Optional directory for log files. Console-only when unset.
    #[serde(default)]
    pub log_dir: Option<String>,
    /// Logger filter expression (e.g. `"info"` or `"info,covault=debug"`).
    #[serde(default)]
    pub log_filters: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ChainConfig {
    #[serde(default)]
    pub chain_id: u64,
    #[serde(default)]
    pub rpc_url: String,
}

impl ChainConfig {
    pub fn provider(&self) -> ProviderHandle {
        ProviderHandle { chain_id: self.chain_id, rpc_url: self.rpc_url.clone() }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Offer fee-relayed execution at all.
    #[serde(default)]
    pub enabled: bool,
    /// Relay service base URL; required when enabled.
    #[serde(default)]
    pub url: String,
    /// Default provenance string attached to relayed submissions.
    #[serde(default)]
    pub origin: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub chain: ChainConfig,
    #[serde(default)]
    pub relay: RelayConfig,
}
