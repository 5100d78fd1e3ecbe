//! Client configuration

use crate::error::{ConfigError, ConfigResult};
use crate::network::NetworkType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Commitment level requested from the node, ordered from weakest to strongest
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    Confirmed,
    #[default]
    Finalized,
}

impl Commitment {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::Confirmed => "confirmed",
            Self::Finalized => "finalized",
        }
    }
}

impl std::str::FromStr for Commitment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "processed" => Ok(Self::Processed),
            "confirmed" => Ok(Self::Confirmed),
            "finalized" => Ok(Self::Finalized),
            _ => Err(ConfigError::UnknownCommitment(s.to_string())),
        }
    }
}

impl std::fmt::Display for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the RPC client needs to reach a node.
///
/// Loaded from TOML, e.g.
///
/// ```toml
/// network = "devnet"
/// endpoint_override = "http://127.0.0.1:8899"
/// timeout_ms = 10000
/// commitment = "confirmed"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Network whose canonical endpoint is used when no override is set
    pub network: NetworkType,

    /// Explicit endpoint, wins over `network`
    #[serde(alias = "url")]
    pub endpoint_override: Option<Url>,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,

    /// Commitment attached to balance queries; node default when unset
    pub commitment: Option<Commitment>,

    /// Interval between signature status polls in milliseconds
    pub poll_interval_ms: u64,

    /// Deadline for a requested airdrop to confirm, in milliseconds
    pub confirm_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            network: NetworkType::default(),
            endpoint_override: None,
            timeout_ms: crate::DEFAULT_TIMEOUT_MS,
            commitment: None,
            poll_interval_ms: crate::DEFAULT_POLL_INTERVAL_MS,
            confirm_timeout_ms: crate::DEFAULT_CONFIRM_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// Default configuration for the given network.
    #[must_use]
    pub fn for_network(network: NetworkType) -> Self {
        Self {
            network,
            ..Self::default()
        }
    }

    /// Sets the endpoint override.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint_override = Some(endpoint);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> ConfigResult<Url> {
        match &self.endpoint_override {
            Some(url) => Ok(url.clone()),
            None => self.network.endpoint(),
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    #[must_use]
    pub fn confirm_timeout(&self) -> Duration {
        Duration::from_millis(self.confirm_timeout_ms)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        // Resolve the tag first so a bad one reports UnknownNetwork, not Parse.
        let table: toml::Table = toml::from_str(content)?;
        if let Some(tag) = table.get("network").and_then(toml::Value::as_str) {
            tag.parse::<NetworkType>()?;
        }
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(
            target: "solbal::config",
            path = %path.display(),
            network = %config.network,
            "loaded client configuration"
        );
        Ok(config)
    }

    /// Checks value ranges and the endpoint scheme.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if let Some(url) = &self.endpoint_override {
            check_scheme(url)?;
        }
        Ok(())
    }
}

/// Parses an endpoint URL, accepting only `http` and `https`.
pub fn parse_endpoint(text: &str) -> ConfigResult<Url> {
    let url = Url::parse(text.trim()).map_err(|err| ConfigError::InvalidEndpoint {
        url: text.to_string(),
        reason: err.to_string(),
    })?;
    check_scheme(&url)?;
    Ok(url)
}

fn check_scheme(url: &Url) -> ConfigResult<()> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidEndpoint {
            url: url.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
