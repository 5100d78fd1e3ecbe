use serde_json::Value;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Why a request never produced a response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// DNS resolution or TCP/TLS connection failed
    Connect,
    /// No response before the deadline
    Timeout,
    /// Non-success HTTP status without a JSON-RPC body
    Status(u16),
    /// Any other I/O failure
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect => f.write_str("connect"),
            Self::Timeout => f.write_str("timeout"),
            Self::Status(code) => write!(f, "HTTP {code}"),
            Self::Other => f.write_str("other"),
        }
    }
}

/// Errors returned by the RPC client
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientRpcError {
    /// The request did not complete at the transport level.
    #[error("transport error ({kind}): {message}")]
    Transport {
        kind: TransportErrorKind,
        message: String,
    },

    /// The node answered with something that is not a valid envelope.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The node answered with a JSON-RPC error object.
    #[error("{message} (code {code})")]
    Remote {
        code: i64,
        message: String,
        data: Option<Value>,
    },
}

impl ClientRpcError {
    pub fn transport(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self::Transport {
            kind,
            message: message.into(),
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }

    pub(crate) fn timeout(after: Duration) -> Self {
        Self::transport(
            TransportErrorKind::Timeout,
            format!("no response within {} ms", after.as_millis()),
        )
    }

    /// JSON-RPC error code for remote errors.
    #[must_use]
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Remote { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Transport failure kind, if this is a transport error.
    #[must_use]
    pub fn transport_kind(&self) -> Option<TransportErrorKind> {
        match self {
            Self::Transport { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientRpcError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportErrorKind::Timeout
        } else if err.is_connect() {
            TransportErrorKind::Connect
        } else {
            TransportErrorKind::Other
        };
        Self::transport(kind, err.to_string())
    }
}
