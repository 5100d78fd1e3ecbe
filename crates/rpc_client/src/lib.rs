//! solbal RPC Client Library
//!
//! A small JSON-RPC 2.0 client for ledger nodes. The HTTP exchange sits
//! behind the [`RpcTransport`] trait so callers can inject their own
//! transport; [`HttpTransport`] is the default.

mod client_rpc_error;
pub mod models;
mod rpc_client;
mod transport;

pub use client_rpc_error::{ClientRpcError, TransportErrorKind};
pub use rpc_client::RpcClient;
pub use transport::{HttpTransport, RpcTransport, TransportResponse};

// Re-export commonly used types
pub use models::{
    RpcBalance, RpcContext, RpcRequest, RpcResponse, RpcResponseError, RpcSignatureStatus,
};

/// Result type for RPC client operations
pub type RpcResult<T> = Result<T, ClientRpcError>;
