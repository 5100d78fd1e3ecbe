use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC protocol version sent with every request.
pub const JSON_RPC_VERSION: &str = "2.0";

/// RPC request structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    /// JSON-RPC version
    pub jsonrpc: String,

    /// Request ID, echoed by the node
    pub id: u64,

    /// Method name
    pub method: String,

    /// Positional parameters
    pub params: Vec<Value>,
}

impl RpcRequest {
    /// Creates a new RPC request
    pub fn new(id: u64, method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: JSON_RPC_VERSION.to_string(),
            id,
            method: method.into(),
            params,
        }
    }
}
