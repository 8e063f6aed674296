// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

mod common;

use common::{MockGateway, PROXY, Reply, address, b64_address, b64_int};
use server::client::{GatewayClient, NetworkError, QueryClient};
use std::time::Duration;

fn client(url: &str) -> GatewayClient {
    GatewayClient::new(url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_query_returns_slots() {
    let gateway = MockGateway::new()
        .slots(PROXY, "getCollectionCreationFee", vec![b64_int(1_000_000_000_000_000_000)])
        .start()
        .await;

    let result = client(&gateway.url)
        .query_contract(PROXY, "getCollectionCreationFee", &[])
        .await
        .unwrap();

    assert_eq!(result.return_data, vec!["DeC2s6dkAAA=".to_string()]);
}

#[tokio::test]
async fn test_query_sends_hex_args() {
    let owner = address(0xab);
    let gateway = MockGateway::new()
        .slots(PROXY, "getAddressMinters", vec![b64_address(&address(1))])
        .start()
        .await;

    client(&gateway.url)
        .query_contract(PROXY, "getAddressMinters", &[owner.pubkey().to_vec()])
        .await
        .unwrap();

    let requests = gateway.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["scAddress"], PROXY);
    assert_eq!(requests[0]["funcName"], "getAddressMinters");
    assert_eq!(requests[0]["args"][0], "ab".repeat(32));
}

#[tokio::test]
async fn test_contract_error_is_reported() {
    let gateway = MockGateway::new()
        .reply(PROXY, "getLiveMinters", Reply::ContractError("storage decode error".into()))
        .start()
        .await;

    let err = client(&gateway.url)
        .query_contract(PROXY, "getLiveMinters", &[])
        .await
        .unwrap_err();

    match err {
        NetworkError::ContractReturned { code, message } => {
            assert_eq!(code, "user error");
            assert_eq!(message, "storage decode error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_gateway_error_envelope_on_bad_request() {
    let gateway = MockGateway::new().start().await;

    let err = client(&gateway.url)
        .query_contract(PROXY, "getNothing", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, NetworkError::Gateway { ref code, .. } if code == "bad_request"));
}

#[tokio::test]
async fn test_plain_http_failure() {
    let gateway = MockGateway::new()
        .reply(PROXY, "getLiveMinters", Reply::Http(503))
        .start()
        .await;

    let err = client(&gateway.url)
        .query_contract(PROXY, "getLiveMinters", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, NetworkError::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_unreachable_gateway() {
    // Nothing listens on port 9 locally
    let err = client("http://127.0.0.1:9")
        .query_contract(PROXY, "getLiveMinters", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, NetworkError::Request { .. }));
    assert!(!err.is_timeout());
}

#[tokio::test]
async fn test_slow_gateway_times_out() {
    let gateway = MockGateway::new()
        .reply(PROXY, "getCollectionCreationFee", Reply::Stall(Duration::from_secs(3)))
        .start()
        .await;

    let err = GatewayClient::new(&gateway.url, Duration::from_secs(1))
        .unwrap()
        .query_contract(PROXY, "getCollectionCreationFee", &[])
        .await
        .unwrap_err();

    assert!(matches!(err, NetworkError::Request { .. }));
    assert!(err.is_timeout());
}
