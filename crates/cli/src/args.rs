use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use solbal::config::ENDPOINT_ENV_VAR;
use solbal::Commitment;
use std::path::PathBuf;

/// Command-line arguments for solbal
#[derive(Parser, Debug, Clone)]
#[command(
    name = "solbal",
    version,
    about = "Query the SOL balance of an account over JSON-RPC",
    long_about = "Resolves a network endpoint, decodes a base-58 account address and asks the node for the account balance with getBalance. The balance is printed in SOL unless --lamports or --json is given."
)]
pub struct CliArgs {
    /// Base-58 account address
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// Network to query (mainnet, testnet, devnet, local)
    #[arg(short = 'n', long = "network", value_name = "NETWORK")]
    pub network: Option<String>,

    /// Explicit RPC endpoint, overrides the network
    #[arg(short = 'u', long = "url", value_name = "URL", env = ENDPOINT_ENV_VAR)]
    pub url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long = "timeout-ms", value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Commitment level for the query
    #[arg(long = "commitment", value_enum, value_name = "LEVEL")]
    pub commitment: Option<CommitmentLevel>,

    /// Specifies the config file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the raw lamport amount
    #[arg(long = "lamports", conflicts_with = "json")]
    pub lamports: bool,

    /// Print the balance as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Request an airdrop when the balance is below the threshold
    #[arg(long = "airdrop")]
    pub airdrop: bool,

    /// Airdrop threshold in SOL
    #[arg(long = "airdrop-threshold", value_name = "SOL", default_value = "1")]
    pub airdrop_threshold: Decimal,

    /// Airdrop amount in SOL
    #[arg(long = "airdrop-amount", value_name = "SOL", default_value = "1")]
    pub airdrop_amount: Decimal,

    /// The verbose log level
    #[arg(long = "verbose", value_enum, default_value = "warn")]
    pub verbose: LogLevel,
}

/// Log level enumeration
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Trace level logging
    Trace,
    /// Debug level logging
    Debug,
    /// Info level logging
    Info,
    /// Warning level logging
    Warn,
    /// Error level logging
    Error,
}

impl LogLevel {
    /// Filter directive used when `RUST_LOG` is unset.
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Commitment levels accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitmentLevel {
    /// Processed by the connected node
    Processed,
    /// Voted on by a supermajority
    Confirmed,
    /// Rooted
    Finalized,
}

impl From<CommitmentLevel> for Commitment {
    fn from(level: CommitmentLevel) -> Self {
        match level {
            CommitmentLevel::Processed => Commitment::Processed,
            CommitmentLevel::Confirmed => Commitment::Confirmed,
            CommitmentLevel::Finalized => Commitment::Finalized,
        }
    }
}

/// How the balance is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<sol> SOL`
    Sol,
    /// Raw integer lamports
    Lamports,
    /// One JSON object
    Json,
}

impl CliArgs {
    /// Selected output format
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.lamports {
            OutputFormat::Lamports
        } else {
            OutputFormat::Sol
        }
    }
}
