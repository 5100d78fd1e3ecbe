use crate::client_rpc_error::ClientRpcError;
use crate::models::{RpcBalance, RpcRequest, RpcResponse, RpcSignatureStatus};
use crate::transport::{HttpTransport, RpcTransport, TransportResponse};
use crate::RpcResult;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use solbal_config::Commitment;
use solbal_primitives::{Address, Signature};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};
use url::Url;

/// Wrapper for results that carry a slot context, e.g. `getSignatureStatuses`.
#[derive(serde::Deserialize)]
struct WithContext<T> {
    value: T,
}

/// The RPC client to call ledger node methods
pub struct RpcClient<T = HttpTransport> {
    endpoint: Url,
    transport: T,
    timeout: Duration,
    next_id: AtomicU64,
}

impl RpcClient<HttpTransport> {
    /// Creates a client that talks HTTP(S) to `endpoint`.
    pub fn new(endpoint: Url, timeout: Duration) -> RpcResult<Self> {
        Ok(Self::with_transport(
            endpoint,
            HttpTransport::new(timeout)?,
            timeout,
        ))
    }
}

impl<T: RpcTransport> RpcClient<T> {
    /// Creates a client over an injected transport.
    pub fn with_transport(endpoint: Url, transport: T, timeout: Duration) -> Self {
        Self {
            endpoint,
            transport,
            timeout,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends one request and returns its `result`.
    ///
    /// A single attempt is made. The configured timeout bounds the whole
    /// exchange regardless of the transport.
    pub async fn call(&self, method: &str, params: Vec<Value>) -> RpcResult<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::new(id, method, params);
        let body = serde_json::to_string(&request)
            .map_err(|err| ClientRpcError::protocol(format!("failed to encode request: {err}")))?;

        debug!(
            target: "solbal::rpc",
            method,
            id,
            endpoint = %self.endpoint,
            "sending rpc request"
        );
        trace!(target: "solbal::rpc", body = %body, "request body");

        let start = Instant::now();
        let reply = tokio::time::timeout(self.timeout, self.transport.post(&self.endpoint, body))
            .await
            .map_err(|_| ClientRpcError::timeout(self.timeout))
            .and_then(|reply| reply);

        let result = reply.and_then(|reply| Self::as_rpc_result(id, &reply));
        let elapsed_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => debug!(target: "solbal::rpc", method, id, elapsed_ms, "rpc request completed"),
            Err(err) => warn!(
                target: "solbal::rpc",
                method,
                id,
                elapsed_ms,
                error = %err,
                "rpc request failed"
            ),
        }
        result
    }

    /// Sends one request and deserializes its `result` into `R`.
    pub async fn call_as<R: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> RpcResult<R> {
        let result = self.call(method, params).await?;
        serde_json::from_value(result).map_err(|err| {
            ClientRpcError::protocol(format!("{method}: unexpected result shape: {err}"))
        })
    }

    /// Returns the lamport balance of `address`.
    pub async fn get_balance(
        &self,
        address: &Address,
        commitment: Option<Commitment>,
    ) -> RpcResult<RpcBalance> {
        let mut params = vec![json!(address.to_string())];
        if let Some(commitment) = commitment {
            params.push(json!({ "commitment": commitment.as_str() }));
        }
        self.call_as("getBalance", params).await
    }

    /// Asks the node's faucet to send `lamports` to `address`.
    pub async fn request_airdrop(
        &self,
        address: &Address,
        lamports: u64,
        commitment: Option<Commitment>,
    ) -> RpcResult<Signature> {
        let mut params = vec![json!(address.to_string()), json!(lamports)];
        if let Some(commitment) = commitment {
            params.push(json!({ "commitment": commitment.as_str() }));
        }
        let signature: String = self.call_as("requestAirdrop", params).await?;
        signature.parse().map_err(|err| {
            ClientRpcError::protocol(format!("requestAirdrop: invalid signature: {err}"))
        })
    }

    /// Returns the status of each signature; `None` for unknown signatures.
    pub async fn get_signature_statuses(
        &self,
        signatures: &[Signature],
    ) -> RpcResult<Vec<Option<RpcSignatureStatus>>> {
        let list: Vec<String> = signatures.iter().map(ToString::to_string).collect();
        let result: WithContext<Vec<Option<RpcSignatureStatus>>> = self
            .call_as("getSignatureStatuses", vec![json!(list)])
            .await?;

        if result.value.len() != signatures.len() {
            return Err(ClientRpcError::protocol(format!(
                "getSignatureStatuses: expected {} statuses, got {}",
                signatures.len(),
                result.value.len()
            )));
        }
        Ok(result.value)
    }

    /// Validates the envelope against request `id` and extracts `result`.
    fn as_rpc_result(id: u64, reply: &TransportResponse) -> RpcResult<Value> {
        let response: RpcResponse = match serde_json::from_str(&reply.body) {
            Ok(response) => response,
            Err(_) if !reply.is_success() => {
                return Err(ClientRpcError::transport(
                    crate::TransportErrorKind::Status(reply.status),
                    truncate(&reply.body),
                ))
            }
            Err(err) => {
                return Err(ClientRpcError::protocol(format!(
                    "malformed response: {err}"
                )))
            }
        };

        // Gateways answer rejected requests with arbitrary JSON bodies.
        if !reply.is_success() && response.error.is_none() {
            return Err(ClientRpcError::transport(
                crate::TransportErrorKind::Status(reply.status),
                truncate(&reply.body),
            ));
        }

        let id_matches = response.id.as_u64() == Some(id);
        match (response.result, response.error) {
            (Some(_), Some(_)) => Err(ClientRpcError::protocol(
                "response carries both result and error",
            )),
            (None, None) => Err(ClientRpcError::protocol(
                "response carries neither result nor error",
            )),
            // Nodes answer unparseable requests with a null id.
            (None, Some(error)) if id_matches || response.id.is_null() => {
                Err(ClientRpcError::Remote {
                    code: error.code,
                    message: error.message,
                    data: error.data,
                })
            }
            (Some(result), None) if id_matches => Ok(result),
            _ => Err(ClientRpcError::protocol(format!(
                "response id {} does not match request id {id}",
                response.id
            ))),
        }
    }
}

fn truncate(body: &str) -> String {
    const LIMIT: usize = 256;
    match body.char_indices().nth(LIMIT) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
