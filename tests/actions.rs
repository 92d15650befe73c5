mod common;

use chrono::NaiveDate;
use httpmock::Method::POST;
use httpmock::MockServer;
use serde_json::json;
use tushare_rs::{adjust, moneyflow, premarket, repurchase};

#[tokio::test]
async fn adj_factor_decodes_rows() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/").json_body_includes(
            r#"{
                "api_name": "adj_factor",
                "params": { "ts_code": "000001.SZ" },
                "fields": "ts_code,trade_date,adj_factor"
            }"#,
        );
        then.status(200)
            .header("content-type", "application/json")
            .body(common::envelope(
                &["ts_code", "trade_date", "adj_factor"],
                json!([["000001.SZ", "20240102", 123.456]]),
            ));
    });

    let client = common::mock_client(&server);
    let factors = adjust::adj_factor(&client)
        .code("000001.SZ")
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(factors[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    assert_eq!(factors[0].factor, 123.456);
}

#[tokio::test]
async fn moneyflow_decodes_all_buckets() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .json_body_includes(r#"{ "api_name": "moneyflow" }"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(common::envelope(
                &[
                    "ts_code",
                    "trade_date",
                    "buy_sm_vol",
                    "buy_sm_amount",
                    "sell_sm_vol",
                    "sell_sm_amount",
                    "buy_md_vol",
                    "buy_md_amount",
                    "sell_md_vol",
                    "sell_md_amount",
                    "buy_lg_vol",
                    "buy_lg_amount",
                    "sell_lg_vol",
                    "sell_lg_amount",
                    "buy_elg_vol",
                    "buy_elg_amount",
                    "sell_elg_vol",
                    "sell_elg_amount",
                    "net_mf_vol",
                    "net_mf_amount",
                ],
                json!([[
                    "000001.SZ", "20240102", 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0,
                    10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0
                ]]),
            ));
    });

    let client = common::mock_client(&server);
    let flows = moneyflow::moneyflow(&client)
        .date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
        .fetch()
        .await
        .unwrap();

    let flow = &flows[0];
    assert_eq!(flow.buy_sm_vol, 1.0);
    assert_eq!(flow.sell_sm_amount, 4.0);
    assert_eq!(flow.buy_elg_vol, 13.0);
    assert_eq!(flow.net_mf_vol, 17.0);
    assert_eq!(flow.net_mf_amount, 18.0);
}

#[tokio::test]
async fn premarket_decodes_price_limits() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .json_body_includes(r#"{ "api_name": "stk_premarket" }"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(common::envelope(
                &[
                    "ts_code",
                    "trade_date",
                    "total_share",
                    "float_share",
                    "pre_close",
                    "up_limit",
                    "down_limit",
                ],
                json!([["000001.SZ", "20240102", 194059.0, 194058.0, 10.1, 11.11, 9.09]]),
            ));
    });

    let client = common::mock_client(&server);
    let rows = premarket::premarket(&client)
        .code("000001.SZ")
        .fetch()
        .await
        .unwrap();

    assert_eq!(rows[0].up_limit, 11.11);
    assert_eq!(rows[0].down_limit, 9.09);
}

#[tokio::test]
async fn repurchase_decodes_pending_programs_with_null_dates() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .json_body_includes(r#"{ "api_name": "repurchase", "params": { "ann_date": "20240102" } }"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(common::envelope(
                &[
                    "ts_code",
                    "ann_date",
                    "end_date",
                    "exp_date",
                    "proc",
                    "volume",
                    "amount",
                    "high_limit",
                    "low_limit",
                ],
                json!([
                    ["000001.SZ", "20240102", null, null, "预案", null, null, 12.0, 8.0],
                    ["600000.SH", "20240102", "20240301", "20250102", "完成", 1000.0, 9500.0, 10.0, 9.0]
                ]),
            ));
    });

    let client = common::mock_client(&server);
    let rows = repurchase::repurchase(&client)
        .ann_date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
        .fetch()
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].end_date, None);
    assert_eq!(rows[0].proc, "预案");
    assert_eq!(rows[0].volume, 0.0);
    assert_eq!(
        rows[1].exp_date,
        Some(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap())
    );
    assert_eq!(rows[1].amount, 9500.0);
}
