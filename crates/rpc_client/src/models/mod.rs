//! JSON-RPC envelope and result models.

mod rpc_balance;
mod rpc_request;
mod rpc_response;
mod rpc_signature_status;

pub use rpc_balance::{RpcBalance, RpcContext};
pub use rpc_request::RpcRequest;
pub use rpc_response::{RpcResponse, RpcResponseError};
pub use rpc_signature_status::RpcSignatureStatus;
