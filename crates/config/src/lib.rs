//! solbal Configuration Module
//!
//! Network selection, endpoint resolution and the explicit client
//! configuration passed to the RPC client.

mod client;
mod error;
mod network;

pub use client::{parse_endpoint, ClientConfig, Commitment};
pub use error::{ConfigError, ConfigResult};
pub use network::{resolve_endpoint, NetworkType};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default interval between signature status polls.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Default deadline for an airdrop to reach `confirmed`.
pub const DEFAULT_CONFIRM_TIMEOUT_MS: u64 = 60_000;

/// Environment variable holding an endpoint override.
pub const ENDPOINT_ENV_VAR: &str = "SOLBAL_RPC_URL";

/// Public cluster endpoints
pub const MAINNET_URL: &str = "https://api.mainnet-beta.solana.com";
pub const TESTNET_URL: &str = "https://api.testnet.solana.com";
pub const DEVNET_URL: &str = "https://api.devnet.solana.com";
pub const LOCAL_URL: &str = "http://127.0.0.1:8899";
