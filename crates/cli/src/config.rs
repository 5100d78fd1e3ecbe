//! Layers the config file, environment and flags into a [`ClientConfig`].
//!
//! Precedence is defaults < config file < environment < flags. The only
//! environment input is the endpoint override, which clap folds into `--url`.

use crate::args::CliArgs;
use rust_decimal::Decimal;
use solbal::config::{parse_endpoint, ConfigError};
use solbal::primitives::from_display_units;
use solbal::{BalanceError, ClientConfig, NetworkType};

/// Builds the effective client configuration for `args`.
pub fn build_config(args: &CliArgs) -> Result<ClientConfig, BalanceError> {
    let mut config = match &args.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };

    if let Some(network) = &args.network {
        config.network = network.parse::<NetworkType>()?;
    }

    if let Some(url) = &args.url {
        config.endpoint_override = Some(parse_endpoint(url)?);
    }

    if let Some(timeout_ms) = args.timeout_ms {
        config.timeout_ms = timeout_ms;
    }

    if let Some(commitment) = args.commitment {
        config.commitment = Some(commitment.into());
    }

    config.validate()?;
    Ok(config)
}

/// Airdrop threshold and amount in lamports.
pub fn airdrop_lamports(args: &CliArgs) -> Result<(u64, u64), BalanceError> {
    let threshold = sol_to_lamports("airdrop-threshold", args.airdrop_threshold)?;
    let amount = sol_to_lamports("airdrop-amount", args.airdrop_amount)?;
    if amount == 0 {
        return Err(ConfigError::InvalidValue {
            field: "airdrop-amount",
            reason: "must be greater than zero".to_string(),
        }
        .into());
    }
    Ok((threshold, amount))
}

fn sol_to_lamports(field: &'static str, sol: Decimal) -> Result<u64, BalanceError> {
    from_display_units(sol).ok_or_else(|| {
        ConfigError::InvalidValue {
            field,
            reason: format!("{sol} SOL is not a whole number of lamports within range"),
        }
        .into()
    })
}
