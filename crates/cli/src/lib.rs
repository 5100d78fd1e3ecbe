//! solbal command-line interface
//!
//! Argument parsing, configuration layering, logging setup and output for the
//! `solbal` binary.

pub mod args;
pub mod config;
pub mod output;

use anyhow::Result;
use args::{CliArgs, LogLevel};
use solbal::{Address, BalanceError, BalanceQuery};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit code for failures that carry no [`BalanceError`].
pub const GENERIC_FAILURE: u8 = 1;

/// Installs the stderr subscriber; `RUST_LOG` wins over `--verbose`.
pub fn init_tracing(level: LogLevel) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_directive()));
    // A global subscriber may already be set, e.g. by an earlier call in tests.
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs one query and returns the text for stdout.
pub async fn run(args: &CliArgs) -> Result<String> {
    let config = config::build_config(args)?;
    let network = config.network;
    let query = BalanceQuery::from_config(config)?;
    info!(
        target: "solbal::cli",
        network = %network,
        endpoint = %query.client().endpoint(),
        "starting balance query"
    );

    let format = args.output_format();

    if args.airdrop {
        let (threshold, amount) = config::airdrop_lamports(args)?;
        let address = args.address.trim().parse::<Address>().map_err(BalanceError::from)?;
        let outcome = query
            .airdrop_if_required(&address, threshold, amount)
            .await?;
        eprintln!("{}", output::airdrop_notice(&outcome));
        return Ok(output::render_airdrop(&outcome, format)?);
    }

    let balance = query.fetch(&args.address).await?;
    Ok(output::render_balance(&balance, format)?)
}

/// Process exit code for an error returned by [`run`].
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<BalanceError>()
        .map_or(GENERIC_FAILURE, |err| err.kind().exit_code())
}
