use solbal_config::{ConfigError, NetworkType};
use solbal_primitives::{PrimitiveError, Signature};
use solbal_rpc_client::{ClientRpcError, TransportErrorKind};
use thiserror::Error;

/// Every way a balance query can fail.
///
/// All variants are terminal: nothing is retried and no partial result is
/// returned.
#[derive(Error, Debug)]
pub enum BalanceError {
    /// The network tag is not one of the known clusters.
    #[error("unknown network '{0}' (expected mainnet, testnet, devnet or local)")]
    UnknownNetwork(String),

    /// The address contains a character outside the base-58 alphabet.
    #[error("invalid address: character '{character}' at index {index} is not base-58")]
    InvalidAddressEncoding {
        /// Offending character
        character: char,
        /// Byte offset in the input
        index: usize,
    },

    /// The address does not decode to 32 bytes.
    #[error("invalid address: decodes to {actual} bytes, expected 32")]
    InvalidAddressLength {
        /// Decoded byte count
        actual: usize,
    },

    /// The request did not complete.
    #[error("transport error ({kind}): {message}")]
    Transport {
        /// Connect, timeout, HTTP status or other
        kind: TransportErrorKind,
        /// Underlying error text
        message: String,
    },

    /// The node's reply was not a valid envelope.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The node returned a JSON-RPC error.
    #[error("{message} (code {code})")]
    Remote {
        /// JSON-RPC error code
        code: i64,
        /// Error message from the node
        message: String,
    },

    /// Invalid configuration file or option.
    #[error("configuration error: {0}")]
    Config(ConfigError),

    /// Airdrops are not offered on this network.
    #[error("airdrops are not available on {0}")]
    AirdropUnavailable(NetworkType),

    /// The airdrop transaction failed or never confirmed.
    #[error("airdrop {signature} failed: {reason}")]
    AirdropFailed {
        /// Airdrop transaction signature
        signature: Signature,
        /// Failure description
        reason: String,
    },
}

/// Error category a caller can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`BalanceError::UnknownNetwork`]
    UnknownNetwork,
    /// See [`BalanceError::InvalidAddressEncoding`]
    InvalidAddressEncoding,
    /// See [`BalanceError::InvalidAddressLength`]
    InvalidAddressLength,
    /// See [`BalanceError::Transport`]
    Transport(TransportErrorKind),
    /// See [`BalanceError::Protocol`]
    Protocol,
    /// See [`BalanceError::Remote`]
    Remote,
    /// See [`BalanceError::Config`]
    Config,
    /// See [`BalanceError::AirdropUnavailable`] and [`BalanceError::AirdropFailed`]
    Airdrop,
}

impl ErrorKind {
    /// Process exit code for this kind of failure.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::UnknownNetwork
            | Self::InvalidAddressEncoding
            | Self::InvalidAddressLength
            | Self::Config => 2,
            Self::Transport(_) => 3,
            Self::Protocol => 4,
            Self::Remote => 5,
            Self::Airdrop => 6,
        }
    }
}

impl BalanceError {
    /// Category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownNetwork(_) => ErrorKind::UnknownNetwork,
            Self::InvalidAddressEncoding { .. } => ErrorKind::InvalidAddressEncoding,
            Self::InvalidAddressLength { .. } => ErrorKind::InvalidAddressLength,
            Self::Transport { kind, .. } => ErrorKind::Transport(*kind),
            Self::Protocol(_) => ErrorKind::Protocol,
            Self::Remote { .. } => ErrorKind::Remote,
            Self::Config(_) => ErrorKind::Config,
            Self::AirdropUnavailable(_) | Self::AirdropFailed { .. } => ErrorKind::Airdrop,
        }
    }
}

impl From<ConfigError> for BalanceError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::UnknownNetwork(tag) => Self::UnknownNetwork(tag),
            other => Self::Config(other),
        }
    }
}

impl From<PrimitiveError> for BalanceError {
    fn from(err: PrimitiveError) -> Self {
        match err {
            PrimitiveError::InvalidEncoding { character, index } => {
                Self::InvalidAddressEncoding { character, index }
            }
            PrimitiveError::InvalidLength { actual, .. } => Self::InvalidAddressLength { actual },
        }
    }
}

impl From<ClientRpcError> for BalanceError {
    fn from(err: ClientRpcError) -> Self {
        match err {
            ClientRpcError::Transport { kind, message } => Self::Transport { kind, message },
            ClientRpcError::Protocol(message) => Self::Protocol(message),
            ClientRpcError::Remote { code, message, .. } => Self::Remote { code, message },
        }
    }
}
