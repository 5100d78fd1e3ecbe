//! Transport seam between the RPC client and the network.

use crate::client_rpc_error::ClientRpcError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Raw HTTP-level reply; the client parses the envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    /// A `200 OK` reply carrying `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one serialized request and returns the raw reply.
///
/// Implementations make exactly one attempt; the client applies the deadline.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn post(&self, endpoint: &Url, body: String) -> Result<TransportResponse, ClientRpcError>;
}

#[async_trait]
impl<T: RpcTransport + ?Sized> RpcTransport for std::sync::Arc<T> {
    async fn post(&self, endpoint: &Url, body: String) -> Result<TransportResponse, ClientRpcError> {
        (**self).post(endpoint, body).await
    }
}

/// HTTP(S) transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    /// Creates a transport whose connect and request timeouts are `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, ClientRpcError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(concat!("solbal/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http_client })
    }

    /// Wraps an existing HTTP client.
    #[must_use]
    pub fn with_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn post(&self, endpoint: &Url, body: String) -> Result<TransportResponse, ClientRpcError> {
        let response = self
            .http_client
            .post(endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}
