use serde::{Deserialize, Serialize};

/// Slot context attached to most results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcContext {
    pub slot: u64,
}

/// `getBalance` result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcBalance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<RpcContext>,

    /// Balance in lamports
    pub value: u64,
}

impl RpcBalance {
    #[must_use]
    pub fn slot(&self) -> Option<u64> {
        self.context.map(|context| context.slot)
    }
}
