mod common;

use common::CapturedLogs;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use solstice_helpers::{HelpersError, SafeJson, safe_json};
use tracing::instrument::WithSubscriber;

#[derive(Debug, Deserialize, PartialEq)]
struct Ticker {
    symbol: String,
    price: String,
}

fn response(status: u16, body: &str) -> reqwest::Response {
    http::Response::builder()
        .status(status)
        .body(body.to_string())
        .unwrap()
        .into()
}

#[tokio::test]
async fn test_safe_json_parses_ok_response() {
    let resp = response(200, r#"{"symbol":"BTCUSDT","price":"42.84"}"#);
    let out = safe_json::<Ticker>(resp).await.unwrap();
    assert_eq!(
        out.parsed(),
        Some(Ticker {
            symbol: "BTCUSDT".into(),
            price: "42.84".into()
        })
    );
}

#[tokio::test]
async fn test_safe_json_passes_through_non_200() {
    let resp = response(429, "slow down");
    match safe_json::<Ticker>(resp).await.unwrap() {
        SafeJson::Passthrough(r) => {
            assert_eq!(r.status().as_u16(), 429);
            assert_eq!(r.text().await.unwrap(), "slow down");
        }
        SafeJson::Parsed(v) => panic!("unexpected parse: {v:?}"),
    }
}

#[tokio::test]
async fn test_safe_json_warns_on_non_200() {
    let logs = CapturedLogs::default();
    let out = safe_json::<Ticker>(response(503, "down"))
        .with_subscriber(logs.subscriber())
        .await
        .unwrap();
    assert!(out.parsed().is_none());

    let text = logs.contents();
    assert!(text.contains("WARN"), "{text}");
    assert!(text.contains("response is not 200"), "{text}");
    assert!(text.contains("status=503"), "{text}");
    assert!(text.contains("Service Unavailable"), "{text}");
}

#[tokio::test]
async fn test_safe_json_ok_response_does_not_warn() {
    let logs = CapturedLogs::default();
    safe_json::<Ticker>(response(200, r#"{"symbol":"BTCUSDT","price":"1"}"#))
        .with_subscriber(logs.subscriber())
        .await
        .unwrap();
    assert!(!logs.contents().contains("response is not 200"));
}

#[tokio::test]
async fn test_safe_json_only_decodes_exact_200() {
    let resp = response(201, r#"{"symbol":"BTCUSDT","price":"1"}"#);
    assert!(safe_json::<Ticker>(resp).await.unwrap().parsed().is_none());
}

#[tokio::test]
async fn test_safe_json_bad_body_is_an_error() {
    let resp = response(200, "<html>");
    assert!(matches!(
        safe_json::<Ticker>(resp).await,
        Err(HelpersError::Http(_))
    ));
}
