//! Formatting of query results for stdout.

use crate::args::OutputFormat;
use serde_json::Value;
use solbal::{AirdropOutcome, Balance};

/// Renders a plain balance.
pub fn render_balance(balance: &Balance, format: OutputFormat) -> serde_json::Result<String> {
    Ok(match format {
        OutputFormat::Sol => format!("{} SOL", balance.sol()),
        OutputFormat::Lamports => balance.lamports.to_string(),
        OutputFormat::Json => balance_json(balance)?.to_string(),
    })
}

/// Renders the balance after an airdrop check; JSON output also carries the
/// airdrop signature when one was requested.
pub fn render_airdrop(
    outcome: &AirdropOutcome,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match (format, outcome) {
        (OutputFormat::Json, AirdropOutcome::Funded { signature, balance }) => {
            let mut value = balance_json(balance)?;
            value["airdrop_signature"] = Value::String(signature.to_string());
            Ok(value.to_string())
        }
        _ => render_balance(outcome.balance(), format),
    }
}

/// One-line human note about the airdrop, printed on stderr.
pub fn airdrop_notice(outcome: &AirdropOutcome) -> String {
    match outcome {
        AirdropOutcome::Skipped { balance } => {
            format!("no airdrop required ({} SOL)", balance.sol())
        }
        AirdropOutcome::Funded { signature, .. } => format!("airdrop confirmed: {signature}"),
    }
}

fn balance_json(balance: &Balance) -> serde_json::Result<Value> {
    let mut value = serde_json::to_value(balance)?;
    value["sol"] = Value::String(balance.sol().to_string());
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solbal::{Address, Signature};

    fn balance(lamports: u64, slot: Option<u64>) -> Balance {
        Balance {
            address: Address::new([0u8; 32]),
            lamports,
            slot,
        }
    }

    #[test]
    fn sol_output() {
        assert_eq!(
            render_balance(&balance(2_500_000_000, None), OutputFormat::Sol).unwrap(),
            "2.5 SOL"
        );
        assert_eq!(render_balance(&balance(0, None), OutputFormat::Sol).unwrap(), "0 SOL");
        assert_eq!(
            render_balance(&balance(1, None), OutputFormat::Sol).unwrap(),
            "0.000000001 SOL"
        );
    }

    #[test]
    fn lamports_output() {
        assert_eq!(
            render_balance(&balance(2_500_000_000, None), OutputFormat::Lamports).unwrap(),
            "2500000000"
        );
    }

    #[test]
    fn json_output() {
        let text = render_balance(&balance(1_000_000_000, Some(42)), OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["address"], "11111111111111111111111111111111");
        assert_eq!(value["lamports"], 1_000_000_000u64);
        assert_eq!(value["sol"], "1");
        assert_eq!(value["slot"], 42);

        let text = render_balance(&balance(5, None), OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert!(value.get("slot").is_none());
    }

    #[test]
    fn funded_airdrop_json_carries_signature() {
        let signature = Signature::new([1u8; 64]);
        let outcome = AirdropOutcome::Funded {
            signature,
            balance: balance(1_000_000_000, None),
        };
        let value: Value =
            serde_json::from_str(&render_airdrop(&outcome, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(value["airdrop_signature"], signature.to_string());
        assert_eq!(render_airdrop(&outcome, OutputFormat::Sol).unwrap(), "1 SOL");
        assert_eq!(
            airdrop_notice(&outcome),
            format!("airdrop confirmed: {signature}")
        );
    }
}
