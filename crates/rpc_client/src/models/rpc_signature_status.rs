use serde::{Deserialize, Serialize};
use serde_json::Value;
use solbal_config::Commitment;

/// One entry of a `getSignatureStatuses` result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcSignatureStatus {
    pub slot: u64,

    /// Blocks since confirmation; `None` once rooted
    #[serde(default)]
    pub confirmations: Option<u64>,

    /// Transaction error, `None` on success
    #[serde(default)]
    pub err: Option<Value>,

    #[serde(default)]
    pub confirmation_status: Option<Commitment>,
}

impl RpcSignatureStatus {
    /// Commitment the transaction has reached.
    ///
    /// Nodes that omit `confirmationStatus` report rooted transactions with
    /// `confirmations: null`.
    #[must_use]
    pub fn commitment(&self) -> Commitment {
        match (self.confirmation_status, self.confirmations) {
            (Some(status), _) => status,
            (None, None) => Commitment::Finalized,
            (None, Some(_)) => Commitment::Processed,
        }
    }

    /// Whether the transaction reached at least `commitment`.
    #[must_use]
    pub fn satisfies(&self, commitment: Commitment) -> bool {
        self.commitment() >= commitment
    }

    #[must_use]
    pub fn failed(&self) -> bool {
        self.err.as_ref().is_some_and(|err| !err.is_null())
    }
}
