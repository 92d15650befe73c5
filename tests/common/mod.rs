#![allow(dead_code)]

use std::time::Duration;

use httpmock::MockServer;
use tushare_rs::{Backoff, RetryConfig, TsClient};
use url::Url;

pub fn fast_retry(max_retries: u32) -> RetryConfig {
    RetryConfig {
        enabled: true,
        max_retries,
        backoff: Backoff::Fixed(Duration::from_millis(1)),
        retry_on_remote: true,
    }
}

/// A client pointed at the mock server, with millisecond backoff so retry
/// tests stay fast.
pub fn mock_client(server: &MockServer) -> TsClient {
    TsClient::builder()
        .token("test-token")
        .base_url(Url::parse(&server.base_url()).unwrap())
        .retry_config(fast_retry(2))
        .build()
        .unwrap()
}

/// A success envelope body around the given fields and row matrix.
pub fn envelope(fields: &[&str], items: serde_json::Value) -> String {
    serde_json::json!({
        "code": 0,
        "msg": "",
        "data": { "fields": fields, "items": items }
    })
    .to_string()
}

pub fn reject_envelope(code: i64, msg: &str) -> String {
    serde_json::json!({ "code": code, "msg": msg, "data": null }).to_string()
}
