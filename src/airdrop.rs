use crate::balance::{Balance, BalanceQuery};
use crate::error::BalanceError;
use crate::Result;
use solbal_config::Commitment;
use solbal_primitives::{native_token, Address, Signature};
use solbal_rpc_client::RpcTransport;
use tokio::time::{sleep, Instant};
use tracing::{debug, info};

/// Result of [`BalanceQuery::airdrop_if_required`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AirdropOutcome {
    /// Balance was already at or above the threshold.
    Skipped {
        /// Balance that was checked
        balance: Balance,
    },
    /// An airdrop was requested and confirmed.
    Funded {
        /// Airdrop transaction signature
        signature: Signature,
        /// Balance after confirmation
        balance: Balance,
    },
}

impl AirdropOutcome {
    /// Latest known balance.
    #[must_use]
    pub fn balance(&self) -> &Balance {
        match self {
            Self::Skipped { balance } | Self::Funded { balance, .. } => balance,
        }
    }
}

impl<T: RpcTransport> BalanceQuery<T> {
    /// Requests `amount` lamports from the faucet when the balance of
    /// `address` is below `threshold` lamports, then waits for confirmation.
    pub async fn airdrop_if_required(
        &self,
        address: &Address,
        threshold: u64,
        amount: u64,
    ) -> Result<AirdropOutcome> {
        if self.config.network.is_production() {
            return Err(BalanceError::AirdropUnavailable(self.config.network));
        }

        let balance = self.fetch_address(address).await?;
        if balance.lamports >= threshold {
            info!(
                target: "solbal::airdrop",
                sol = %balance.sol(),
                "sufficient balance, no airdrop required"
            );
            return Ok(AirdropOutcome::Skipped { balance });
        }

        info!(
            target: "solbal::airdrop",
            sol = %balance.sol(),
            amount_sol = %native_token::to_display_units(amount),
            "balance below threshold, requesting airdrop"
        );
        let signature = self
            .client
            .request_airdrop(address, amount, self.config.commitment)
            .await?;
        self.await_confirmation(&signature).await?;

        let balance = self.fetch_address(address).await?;
        Ok(AirdropOutcome::Funded { signature, balance })
    }

    /// Polls the signature status until it reaches the configured commitment
    /// (at least `confirmed`), fails, or the confirmation deadline passes.
    async fn await_confirmation(&self, signature: &Signature) -> Result<()> {
        let target = self
            .config
            .commitment
            .unwrap_or(Commitment::Confirmed)
            .max(Commitment::Confirmed);
        let deadline = Instant::now() + self.config.confirm_timeout();

        loop {
            let statuses = self.client.get_signature_statuses(&[*signature]).await?;
            if let Some(status) = statuses.into_iter().flatten().next() {
                if status.failed() {
                    return Err(BalanceError::AirdropFailed {
                        signature: *signature,
                        reason: status.err.map(|err| err.to_string()).unwrap_or_default(),
                    });
                }
                if status.satisfies(target) {
                    info!(
                        target: "solbal::airdrop",
                        signature = %signature,
                        slot = status.slot,
                        commitment = %status.commitment(),
                        "airdrop confirmed"
                    );
                    return Ok(());
                }
                debug!(
                    target: "solbal::airdrop",
                    commitment = %status.commitment(),
                    "airdrop seen, waiting for {target}"
                );
            }

            if Instant::now() >= deadline {
                return Err(BalanceError::AirdropFailed {
                    signature: *signature,
                    reason: format!(
                        "not {target} within {} ms",
                        self.config.confirm_timeout_ms
                    ),
                });
            }
            sleep(self.config.poll_interval()).await;
        }
    }
}
