//! Network type and endpoint resolution

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use url::Url;

/// Ledger cluster the client talks to
///
/// Deserializes through [`FromStr`](std::str::FromStr), so config files
/// accept the same tags and aliases as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum NetworkType {
    /// Production cluster
    MainNet,
    /// Public validator test cluster
    TestNet,
    /// Public developer cluster with airdrops enabled
    #[default]
    DevNet,
    /// Local test validator
    Local,
}

impl NetworkType {
    /// All known networks, in display order.
    pub const ALL: [NetworkType; 4] = [
        NetworkType::MainNet,
        NetworkType::TestNet,
        NetworkType::DevNet,
        NetworkType::Local,
    ];

    /// Canonical RPC endpoint of the network
    #[must_use]
    pub const fn default_url(&self) -> &'static str {
        match self {
            Self::MainNet => crate::MAINNET_URL,
            Self::TestNet => crate::TESTNET_URL,
            Self::DevNet => crate::DEVNET_URL,
            Self::Local => crate::LOCAL_URL,
        }
    }

    /// Parsed canonical endpoint.
    pub fn endpoint(&self) -> ConfigResult<Url> {
        Url::parse(self.default_url()).map_err(|err| ConfigError::InvalidEndpoint {
            url: self.default_url().to_string(),
            reason: err.to_string(),
        })
    }

    /// Whether the network serves real funds (no faucet).
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::MainNet)
    }
}

impl std::str::FromStr for NetworkType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "mainnet-beta" | "main" => Ok(Self::MainNet),
            "testnet" | "test" => Ok(Self::TestNet),
            "devnet" | "dev" => Ok(Self::DevNet),
            "local" | "localnet" | "localhost" => Ok(Self::Local),
            _ => Err(ConfigError::UnknownNetwork(s.to_string())),
        }
    }
}

impl TryFrom<String> for NetworkType {
    type Error = ConfigError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl std::fmt::Display for NetworkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MainNet => write!(f, "mainnet"),
            Self::TestNet => write!(f, "testnet"),
            Self::DevNet => write!(f, "devnet"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// Resolves a network tag to its RPC endpoint.
///
/// # Errors
///
/// Returns `ConfigError::UnknownNetwork` for unrecognized tags.
pub fn resolve_endpoint(tag: &str) -> ConfigResult<Url> {
    tag.parse::<NetworkType>()?.endpoint()
}
