//! End-to-end balance queries over in-process transports.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use solbal::rpc_client::{ClientRpcError, RpcTransport, TransportErrorKind, TransportResponse};
use solbal::{
    AirdropOutcome, BalanceError, BalanceQuery, ClientConfig, ErrorKind, NetworkType, Signature,
};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use url::Url;

const WALLET: &str = "5BgTrJEQw1XWSJ1DiX1hT78xiHC1RpNtcV8rwrbmGfwU";

/// Replies with a fixed body regardless of the request.
struct FixedTransport(String);

#[async_trait]
impl RpcTransport for FixedTransport {
    async fn post(&self, _endpoint: &Url, _body: String) -> Result<TransportResponse, ClientRpcError> {
        Ok(TransportResponse::ok(self.0.clone()))
    }
}

/// Never answers.
struct SilentTransport;

#[async_trait]
impl RpcTransport for SilentTransport {
    async fn post(&self, _endpoint: &Url, _body: String) -> Result<TransportResponse, ClientRpcError> {
        std::future::pending().await
    }
}

/// Answers each method from its own queue of results, echoing the request id.
#[derive(Default)]
struct ScriptedTransport {
    results: Mutex<HashMap<String, VecDeque<Value>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    fn on(self, method: &str, result: Value) -> Self {
        self.results
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_default()
            .push_back(result);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RpcTransport for ScriptedTransport {
    async fn post(&self, _endpoint: &Url, body: String) -> Result<TransportResponse, ClientRpcError> {
        let request: Value = serde_json::from_str(&body).unwrap();
        let method = request["method"].as_str().unwrap().to_string();
        self.calls.lock().unwrap().push(method.clone());
        let result = self
            .results
            .lock()
            .unwrap()
            .get_mut(&method)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| panic!("no scripted result for {method}"));
        Ok(TransportResponse::ok(
            json!({"jsonrpc": "2.0", "id": request["id"], "result": result}).to_string(),
        ))
    }
}

fn devnet() -> ClientConfig {
    ClientConfig::for_network(NetworkType::DevNet)
}

fn balance_result(lamports: u64) -> Value {
    json!({"context": {"slot": 9}, "value": lamports})
}

#[tokio::test]
async fn fetch_converts_lamports_to_sol() {
    let transport = FixedTransport(r#"{"id":1,"result":{"value":2500000000}}"#.to_string());
    let query = BalanceQuery::with_transport(devnet(), transport).unwrap();

    let balance = query.fetch(WALLET).await.unwrap();

    assert_eq!(balance.lamports, 2_500_000_000);
    assert_eq!(balance.sol(), Decimal::new(25, 1));
    assert_eq!(balance.sol().to_string(), "2.5");
    assert_eq!(balance.address.to_string(), WALLET);
    assert_eq!(balance.slot, None);
}

#[tokio::test]
async fn balance_serializes_with_base58_address() {
    let transport = FixedTransport(
        r#"{"id":1,"result":{"context":{"slot":314},"value":42}}"#.to_string(),
    );
    let query = BalanceQuery::with_transport(devnet(), transport).unwrap();

    let balance = query.fetch(WALLET).await.unwrap();

    assert_eq!(
        serde_json::to_value(balance).unwrap(),
        json!({"address": WALLET, "lamports": 42, "slot": 314})
    );
}

#[tokio::test]
async fn fetch_surfaces_remote_error() {
    let transport = FixedTransport(
        r#"{"id":1,"error":{"code":-32602,"message":"Invalid params"}}"#.to_string(),
    );
    let query = BalanceQuery::with_transport(devnet(), transport).unwrap();

    let err = query.fetch(WALLET).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Remote);
    assert!(matches!(
        err,
        BalanceError::Remote { code: -32602, ref message } if message == "Invalid params"
    ));
}

#[tokio::test]
async fn fetch_times_out_on_silent_transport() {
    let config = devnet().with_timeout_ms(50);
    let query = BalanceQuery::with_transport(config, SilentTransport).unwrap();

    let err = query.fetch(WALLET).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport(TransportErrorKind::Timeout));
}

#[tokio::test]
async fn malformed_reply_is_protocol_error() {
    let query =
        BalanceQuery::with_transport(devnet(), FixedTransport("{\"id\":1,".to_string())).unwrap();

    let err = query.fetch(WALLET).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[tokio::test]
async fn invalid_addresses_fail_before_any_request() {
    let transport = Arc::new(ScriptedTransport::default());
    let query = BalanceQuery::with_transport(devnet(), Arc::clone(&transport)).unwrap();

    let err = query.fetch("0BgTrJEQw1XWSJ1DiX1hT78xiHC1RpNtcV8rwrbmGfwU").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidAddressEncoding);

    let err = query.fetch("1111111111111111111111111111111").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidAddressLength);

    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn airdrop_is_skipped_when_balance_is_sufficient() {
    let transport = Arc::new(ScriptedTransport::default().on("getBalance", balance_result(2_000_000_000)));
    let query = BalanceQuery::with_transport(devnet(), Arc::clone(&transport)).unwrap();
    let address = WALLET.parse().unwrap();

    let outcome = query
        .airdrop_if_required(&address, 1_000_000_000, 1_000_000_000)
        .await
        .unwrap();

    assert!(matches!(outcome, AirdropOutcome::Skipped { .. }));
    assert_eq!(outcome.balance().lamports, 2_000_000_000);
    assert_eq!(transport.calls(), vec!["getBalance"]);
}

#[tokio::test]
async fn airdrop_waits_for_confirmation() {
    let signature = Signature::new([5u8; 64]);
    let transport = Arc::new(
        ScriptedTransport::default()
            .on("getBalance", balance_result(0))
            .on("requestAirdrop", json!(signature.to_string()))
            .on("getSignatureStatuses", json!({"context": {"slot": 10}, "value": [null]}))
            .on(
                "getSignatureStatuses",
                json!({"context": {"slot": 11}, "value": [{
                    "slot": 11, "confirmations": 0, "err": null, "confirmationStatus": "processed"
                }]}),
            )
            .on(
                "getSignatureStatuses",
                json!({"context": {"slot": 12}, "value": [{
                    "slot": 11, "confirmations": 1, "err": null, "confirmationStatus": "confirmed"
                }]}),
            )
            .on("getBalance", balance_result(1_000_000_000)),
    );
    let mut config = devnet();
    config.poll_interval_ms = 1;
    let query = BalanceQuery::with_transport(config, Arc::clone(&transport)).unwrap();
    let address = WALLET.parse().unwrap();

    let outcome = query
        .airdrop_if_required(&address, 1_000_000_000, 1_000_000_000)
        .await
        .unwrap();

    match outcome {
        AirdropOutcome::Funded {
            signature: funded,
            balance,
        } => {
            assert_eq!(funded, signature);
            assert_eq!(balance.sol(), Decimal::ONE);
        }
        other => panic!("expected funded outcome, got {other:?}"),
    }
    assert_eq!(
        transport.calls(),
        vec![
            "getBalance",
            "requestAirdrop",
            "getSignatureStatuses",
            "getSignatureStatuses",
            "getSignatureStatuses",
            "getBalance"
        ]
    );
}

#[tokio::test]
async fn failed_airdrop_is_reported() {
    let signature = Signature::new([6u8; 64]);
    let transport = ScriptedTransport::default()
        .on("getBalance", balance_result(0))
        .on("requestAirdrop", json!(signature.to_string()))
        .on(
            "getSignatureStatuses",
            json!({"context": {"slot": 3}, "value": [{
                "slot": 3, "confirmations": 0, "err": {"InstructionError": [0, "Custom"]},
                "confirmationStatus": "processed"
            }]}),
        );
    let query = BalanceQuery::with_transport(devnet(), transport).unwrap();
    let address = WALLET.parse().unwrap();

    let err = query
        .airdrop_if_required(&address, 1, 1_000_000_000)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Airdrop);
    assert!(err.to_string().contains("InstructionError"));
}

#[tokio::test]
async fn unconfirmed_airdrop_hits_deadline() {
    let signature = Signature::new([7u8; 64]);
    let mut transport = ScriptedTransport::default()
        .on("getBalance", balance_result(0))
        .on("requestAirdrop", json!(signature.to_string()));
    for _ in 0..64 {
        transport = transport.on(
            "getSignatureStatuses",
            json!({"context": {"slot": 1}, "value": [null]}),
        );
    }
    let mut config = devnet();
    config.poll_interval_ms = 5;
    config.confirm_timeout_ms = 20;
    let query = BalanceQuery::with_transport(config, transport).unwrap();
    let address = WALLET.parse().unwrap();

    let err = query
        .airdrop_if_required(&address, 1, 1)
        .await
        .unwrap_err();

    assert!(matches!(err, BalanceError::AirdropFailed { .. }));
    assert!(err.to_string().contains("within 20 ms"));
}

#[tokio::test]
async fn airdrop_is_refused_on_mainnet() {
    let transport = Arc::new(ScriptedTransport::default());
    let query = BalanceQuery::with_transport(
        ClientConfig::for_network(NetworkType::MainNet),
        Arc::clone(&transport),
    )
    .unwrap();
    let address = WALLET.parse().unwrap();

    let err = query
        .airdrop_if_required(&address, 1, 1)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        BalanceError::AirdropUnavailable(NetworkType::MainNet)
    ));
    assert!(transport.calls().is_empty());
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let err = BalanceQuery::with_transport(devnet().with_timeout_ms(0), SilentTransport)
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::Config);
}
