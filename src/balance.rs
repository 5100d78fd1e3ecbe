use crate::error::BalanceError;
use crate::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use solbal_config::ClientConfig;
use solbal_primitives::{native_token, Address};
use solbal_rpc_client::{HttpTransport, RpcClient, RpcTransport};
use tracing::{debug, info};

/// Balance of one account at the time of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Balance {
    /// Queried account
    pub address: Address,
    /// Balance in lamports
    pub lamports: u64,
    /// Slot the node evaluated the query at, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<u64>,
}

impl Balance {
    /// Balance in SOL.
    #[must_use]
    pub fn sol(&self) -> Decimal {
        native_token::to_display_units(self.lamports)
    }
}

/// A configured balance query over an RPC transport.
pub struct BalanceQuery<T = HttpTransport> {
    pub(crate) client: RpcClient<T>,
    pub(crate) config: ClientConfig,
}

impl BalanceQuery<HttpTransport> {
    /// Builds an HTTP-backed query from `config`.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let endpoint = config.endpoint()?;
        let client = RpcClient::new(endpoint, config.timeout())?;
        Ok(Self { client, config })
    }
}

impl<T: RpcTransport> BalanceQuery<T> {
    /// Builds a query over an injected transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        config.validate()?;
        let endpoint = config.endpoint()?;
        let client = RpcClient::with_transport(endpoint, transport, config.timeout());
        Ok(Self { client, config })
    }

    /// Configuration the query was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Underlying RPC client.
    pub fn client(&self) -> &RpcClient<T> {
        &self.client
    }

    /// Decodes `address` and fetches its balance.
    pub async fn fetch(&self, address: &str) -> Result<Balance> {
        let address = Address::decode(address.trim()).map_err(BalanceError::from)?;
        self.fetch_address(&address).await
    }

    /// Fetches the balance of an already decoded address.
    pub async fn fetch_address(&self, address: &Address) -> Result<Balance> {
        debug!(
            target: "solbal",
            address = %address,
            endpoint = %self.client.endpoint(),
            "querying balance"
        );
        let balance = self
            .client
            .get_balance(address, self.config.commitment)
            .await?;

        let balance = Balance {
            address: *address,
            lamports: balance.value,
            slot: balance.slot(),
        };
        info!(
            target: "solbal",
            address = %address,
            lamports = balance.lamports,
            slot = ?balance.slot,
            "balance fetched"
        );
        Ok(balance)
    }
}
