mod common;

use std::time::{Duration, Instant};

use httpmock::Method::POST;
use httpmock::MockServer;
use serde_json::json;
use tushare_rs::{Backoff, Params, RetryConfig, TsClient, TsError};
use url::Url;

#[tokio::test]
async fn call_posts_request_body_and_decodes_envelope() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/").json_body_includes(
            r#"{
                "api_name": "daily",
                "token": "test-token",
                "params": { "ts_code": "000001.SZ" },
                "fields": "ts_code,close"
            }"#,
        );
        then.status(200)
            .header("content-type", "application/json")
            .body(common::envelope(
                &["ts_code", "close"],
                json!([["000001.SZ", 10.2]]),
            ));
    });

    let client = common::mock_client(&server);
    let mut params = Params::new();
    params.set("ts_code", "000001.SZ");

    let resp = client
        .call("daily", &params, &["ts_code", "close"])
        .await
        .unwrap();

    mock.assert();
    assert_eq!(resp.fields, vec!["ts_code", "close"]);
    assert_eq!(resp.rows, vec![vec![json!("000001.SZ"), json!(10.2)]]);
}

#[tokio::test]
async fn persistent_5xx_exhausts_attempts_and_returns_last_status() {
    let server = MockServer::start();

    let fail_mock = server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(500).body("Internal Server Error");
    });

    let max_retries = 3;
    let client = TsClient::builder()
        .token("test-token")
        .base_url(Url::parse(&server.base_url()).unwrap())
        .retry_config(common::fast_retry(max_retries))
        .build()
        .unwrap();

    let result = client.call("daily", &Params::new(), &["ts_code"]).await;

    // 1 initial attempt + max_retries retries.
    fail_mock.assert_calls((1 + max_retries) as usize);
    match result {
        Err(TsError::Status { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected a Status error after all retries, got {other:?}"),
    }
}

#[tokio::test]
async fn remote_rejection_is_retried_by_default() {
    let server = MockServer::start();

    let reject_mock = server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::reject_envelope(40203, "quota exceeded"));
    });

    let client = common::mock_client(&server);
    let result = client.call("daily", &Params::new(), &["ts_code"]).await;

    reject_mock.assert_calls(3);
    match result {
        Err(TsError::Remote { code, msg }) => {
            assert_eq!(code, 40203);
            assert_eq!(msg, "quota exceeded");
        }
        other => panic!("expected a Remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn remote_rejection_short_circuits_when_opted_out() {
    let server = MockServer::start();

    let reject_mock = server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::reject_envelope(2002, "token invalid"));
    });

    let mut retry = common::fast_retry(5);
    retry.retry_on_remote = false;

    let client = TsClient::builder()
        .token("bad-token")
        .base_url(Url::parse(&server.base_url()).unwrap())
        .retry_config(retry)
        .build()
        .unwrap();

    let result = client.call("daily", &Params::new(), &["ts_code"]).await;

    reject_mock.assert_calls(1);
    assert!(matches!(result, Err(TsError::Remote { code: 2002, .. })));
}

#[tokio::test]
async fn retry_sleeps_the_backoff_between_attempts() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(503).body("Service Unavailable");
    });

    let backoff = Duration::from_millis(25);
    let max_retries = 2;
    let client = TsClient::builder()
        .token("test-token")
        .base_url(Url::parse(&server.base_url()).unwrap())
        .retry_config(RetryConfig {
            enabled: true,
            max_retries,
            backoff: Backoff::Fixed(backoff),
            retry_on_remote: true,
        })
        .build()
        .unwrap();

    let started = Instant::now();
    let result = client.call("daily", &Params::new(), &["ts_code"]).await;
    let elapsed = started.elapsed();

    assert!(matches!(result, Err(TsError::Status { status: 503, .. })));
    assert!(
        elapsed >= backoff * max_retries,
        "expected at least {:?} of backoff, got {elapsed:?}",
        backoff * max_retries
    );
}

#[tokio::test]
async fn misaligned_rows_are_a_decode_error_and_never_retried() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::envelope(
                &["ts_code", "close"],
                json!([["000001.SZ"]]),
            ));
    });

    let client = common::mock_client(&server);
    let result = client.call("daily", &Params::new(), &["ts_code", "close"]).await;

    mock.assert_calls(1);
    assert!(matches!(result, Err(TsError::Decode(_))));
}

#[tokio::test]
async fn empty_data_node_decodes_to_empty_response() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"code": 0, "msg": ""}"#);
    });

    let client = common::mock_client(&server);
    let resp = client
        .call("daily", &Params::new(), &["ts_code"])
        .await
        .unwrap();

    assert!(resp.fields.is_empty());
    assert!(resp.rows.is_empty());
}

#[test]
fn building_without_a_token_is_an_auth_error() {
    let result = TsClient::builder().build();
    assert!(matches!(result, Err(TsError::Auth(_))));
}
