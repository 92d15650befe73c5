mod common;

use chrono::NaiveDate;
use httpmock::Method::POST;
use httpmock::MockServer;
use serde_json::json;
use tushare_rs::{TsError, calendar};

#[tokio::test]
async fn trade_cal_requests_open_days_and_decodes_dates() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/").json_body_includes(
            r#"{
                "api_name": "trade_cal",
                "params": {
                    "start_date": "20240101",
                    "end_date": "20240105",
                    "is_open": "1"
                },
                "fields": "cal_date"
            }"#,
        );
        then.status(200)
            .header("content-type", "application/json")
            .body(common::envelope(
                &["cal_date"],
                json!([["20240102"], ["20240103"], ["20240104"], ["20240105"]]),
            ));
    });

    let client = common::mock_client(&server);
    let days = calendar::trade_cal(
        &client,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
    )
    .fetch()
    .await
    .unwrap();

    mock.assert();
    assert_eq!(days.len(), 4);
    assert_eq!(days[0], NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    assert_eq!(days[3], NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
}

#[tokio::test]
async fn trade_cal_rejects_an_inverted_range() {
    let server = MockServer::start();
    let client = common::mock_client(&server);

    let result = calendar::trade_cal(
        &client,
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    )
    .fetch()
    .await;

    assert!(matches!(result, Err(TsError::InvalidDates)));
}
