mod common;

use chrono::NaiveDate;
use httpmock::Method::POST;
use httpmock::MockServer;
use serde_json::json;
use tushare_rs::{TsError, daily};

#[tokio::test]
async fn daily_decodes_one_bar_end_to_end() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/").json_body_includes(
            r#"{
                "api_name": "daily",
                "params": { "ts_code": "000001.SZ", "trade_date": "20240102" },
                "fields": "ts_code,trade_date,open,high,low,close,pre_close,change,pct_chg,vol,amount"
            }"#,
        );
        then.status(200)
            .header("content-type", "application/json")
            .body(common::envelope(
                &[
                    "ts_code",
                    "trade_date",
                    "open",
                    "high",
                    "low",
                    "close",
                    "pre_close",
                    "change",
                    "pct_chg",
                    "vol",
                    "amount",
                ],
                json!([[
                    "000001.SZ",
                    "20240102",
                    10.0,
                    10.5,
                    9.8,
                    10.2,
                    10.1,
                    0.1,
                    0.99,
                    123456.0,
                    98765.4
                ]]),
            ));
    });

    let client = common::mock_client(&server);
    let bars = daily::daily(&client)
        .code("000001.SZ")
        .date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(bars.len(), 1);
    let bar = &bars[0];
    assert_eq!(bar.code, "000001.SZ");
    assert_eq!(bar.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    assert_eq!(bar.open, 10.0);
    assert_eq!(bar.high, 10.5);
    assert_eq!(bar.low, 9.8);
    assert_eq!(bar.close, 10.2);
    assert_eq!(bar.pre_close, 10.1);
    assert_eq!(bar.change, 0.1);
    assert_eq!(bar.pct_change, 0.99);
    assert_eq!(bar.volume, 123456.0);
    assert_eq!(bar.turnover, 98765.4);
}

#[tokio::test]
async fn null_turnover_decodes_to_zero() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::envelope(
                &["ts_code", "trade_date", "close", "amount"],
                json!([["000001.SZ", "20240102", 10.2, null]]),
            ));
    });

    let client = common::mock_client(&server);
    let bars = daily::daily(&client).fetch().await.unwrap();

    assert_eq!(bars[0].turnover, 0.0);
    // Columns the server never returned come back as zero values too.
    assert_eq!(bars[0].open, 0.0);
}

#[tokio::test]
async fn inverted_date_range_fails_before_any_request() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200).body(common::envelope(&[], json!([])));
    });

    let client = common::mock_client(&server);
    let result = daily::daily(&client)
        .date_range(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
        .fetch()
        .await;

    mock.assert_calls(0);
    assert!(matches!(result, Err(TsError::InvalidDates)));
}

#[tokio::test]
async fn later_options_overwrite_earlier_ones() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .json_body_includes(r#"{ "params": { "ts_code": "600000.SH" } }"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(common::envelope(&[], json!([])));
    });

    let client = common::mock_client(&server);
    let bars = daily::daily_vip(&client)
        .code("000001.SZ")
        .code("600000.SH")
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert!(bars.is_empty());
}
