//! # solbal: account balance queries for Solana-style ledgers
//!
//! Wires the endpoint resolver ([`solbal_config`]), the address codec and
//! unit converter ([`solbal_primitives`]) and the JSON-RPC client
//! ([`solbal_rpc_client`]) into a single balance query.
//!
//! ```rust,no_run
//! use solbal::{BalanceQuery, ClientConfig, NetworkType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), solbal::BalanceError> {
//!     let query = BalanceQuery::from_config(ClientConfig::for_network(NetworkType::DevNet))?;
//!     let balance = query.fetch("5BgTrJEQw1XWSJ1DiX1hT78xiHC1RpNtcV8rwrbmGfwU").await?;
//!     println!("{} SOL", balance.sol());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

mod airdrop;
mod balance;
mod error;

pub use airdrop::AirdropOutcome;
pub use balance::{Balance, BalanceQuery};
pub use error::{BalanceError, ErrorKind};

// Re-export the component crates
pub use solbal_config as config;
pub use solbal_primitives as primitives;
pub use solbal_rpc_client as rpc_client;

pub use solbal_config::{ClientConfig, Commitment, NetworkType};
pub use solbal_primitives::{Address, Signature};

/// Result type for balance operations
pub type Result<T> = std::result::Result<T, BalanceError>;
