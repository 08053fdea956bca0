//! Operator configuration for network selection

use crate::network::NetworkId;
use crate::progress::SIGCHECK_VERIFICATION_FACTOR;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameter-related node settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamsConfig {
    /// Network token: `main`, `test` or `regtest`
    pub network: String,
    /// Enforce hard-coded checkpoints
    pub checkpoints: bool,
    /// Relative cost of post-checkpoint transactions in progress estimates
    pub sigcheck_verification_factor: f64,
}

impl Default for ParamsConfig {
    fn default() -> Self {
        Self {
            network: NetworkId::Main.name().to_string(),
            checkpoints: true,
            sigcheck_verification_factor: SIGCHECK_VERIFICATION_FACTOR,
        }
    }
}

impl ParamsConfig {
    /// Config for a network token with default settings
    pub fn for_network(network: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            ..Self::default()
        }
    }

    /// Parse JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load JSON config from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!("Loaded params config from {}", path.display());
        Ok(config)
    }

    /// Selected network.
    ///
    /// Unknown tokens and the internal `unittest` token are configuration
    /// errors here rather than aborts further in.
    pub fn network_id(&self) -> Result<NetworkId> {
        NetworkId::from_cli_token(self.network.trim())
    }

    /// Validated verification factor
    pub fn verification_factor(&self) -> Result<f64> {
        let factor = self.sigcheck_verification_factor;
        if !factor.is_finite() || factor <= 0.0 {
            return Err(Error::Config(format!(
                "sigcheck_verification_factor must be positive, got {}",
                factor
            )));
        }
        Ok(factor)
    }
}
