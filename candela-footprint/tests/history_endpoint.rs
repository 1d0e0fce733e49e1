use candela_core::HistorySource;
use candela_footprint::FootprintConnector;
use candela_types::{CandelaError, Timeframe};
use httpmock::prelude::*;

fn connector(server: &MockServer) -> FootprintConnector {
    FootprintConnector::from_base_url(&server.base_url()).expect("valid mock server url")
}

#[tokio::test]
async fn history_decodes_a_raw_sample_batch() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/footprint/history/1m");
            then.status(200).json_body(serde_json::json!([
                {"bucket": "1700000000", "open": "100.0", "high": "101.5", "low": "99.5", "close": "100.75"},
                {"bucket": "1700000060", "open": "100.75", "high": "102.0", "low": "100.0", "close": "101.0"}
            ]));
        })
        .await;

    let samples = connector(&server)
        .history(Timeframe::M1)
        .await
        .expect("history should succeed");

    mock.assert_async().await;
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].bucket, "1700000000");
    assert_eq!(samples[1].close, "101.0");
}

#[tokio::test]
async fn each_timeframe_maps_to_its_own_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/footprint/history/4h");
            then.status(200).json_body(serde_json::json!([]));
        })
        .await;

    let samples = connector(&server)
        .history(Timeframe::H4)
        .await
        .expect("history should succeed");

    mock.assert_async().await;
    assert!(samples.is_empty());
}

#[tokio::test]
async fn non_success_status_maps_to_status_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/footprint/history/5m");
            then.status(503);
        })
        .await;

    let err = connector(&server)
        .history(Timeframe::M5)
        .await
        .expect_err("503 must not decode");

    assert_eq!(err, CandelaError::status(503));
}

#[tokio::test]
async fn malformed_body_maps_to_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/footprint/history/15m");
            then.status(200).body("{\"oops\": true}");
        })
        .await;

    let err = connector(&server)
        .history(Timeframe::M15)
        .await
        .expect_err("an object is not a sample batch");

    assert!(matches!(err, CandelaError::Decode(_)));
}

#[tokio::test]
async fn unreachable_backend_maps_to_transport_error() {
    // Nothing listens on this port.
    let connector =
        FootprintConnector::from_base_url("http://127.0.0.1:9").expect("url parses fine");

    let err = connector
        .history(Timeframe::M1)
        .await
        .expect_err("connect must fail");

    assert!(matches!(err, CandelaError::Transport { .. }));
}

#[test]
fn garbage_base_url_is_rejected_at_build_time() {
    let err = FootprintConnector::from_base_url("not a url").expect_err("must not parse");
    assert!(matches!(err, CandelaError::InvalidArg(_)));
}
