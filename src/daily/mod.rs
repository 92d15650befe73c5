//! Daily OHLCV bars (`daily`, `daily_vip`).
//!
//! The bar shape is shared with the index, fund, ETF, and THS daily
//! endpoints; their accessors live in the respective modules and reuse
//! [`DailyBuilder`] or the decode routine here.

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::{ColumnarResponse, Params, RetryConfig, TsClient, TsError};

/// One daily bar as returned by the quote endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBar {
    /// Instrument code, e.g. `000001.SZ`.
    pub code: String,
    /// Trade date.
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Previous close.
    pub pre_close: f64,
    /// Price change.
    pub change: f64,
    /// Percent change.
    pub pct_change: f64,
    /// Traded volume, in lots (手).
    pub volume: f64,
    /// Traded amount, in thousands of CNY. Zero for endpoints that do not
    /// report it.
    pub turnover: f64,
}

const BAR_FIELDS: [&str; 11] = [
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
];

/// Daily quotes for listed stocks (`daily`).
#[must_use]
pub fn daily(client: &TsClient) -> DailyBuilder {
    DailyBuilder::new(client, "daily")
}

/// Daily quotes over the VIP endpoint (`daily_vip`).
#[must_use]
pub fn daily_vip(client: &TsClient) -> DailyBuilder {
    DailyBuilder::new(client, "daily_vip")
}

/// A builder for the bar-shaped daily quote endpoints.
#[derive(Debug)]
pub struct DailyBuilder {
    client: TsClient,
    api: &'static str,
    params: Params,
    retry_override: Option<RetryConfig>,
}

impl DailyBuilder {
    pub(crate) fn new(client: &TsClient, api: &'static str) -> Self {
        Self {
            client: client.clone(),
            api,
            params: Params::new(),
            retry_override: None,
        }
    }

    /// Restrict to one instrument code.
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.params.set("ts_code", code.into());
        self
    }

    /// Restrict to a single trade date.
    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.params.set_date("trade_date", date);
        self
    }

    /// Restrict to an inclusive trade-date range.
    #[must_use]
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.params.set_date_range(start, end);
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns `TsError` if the date range is inverted, the network request
    /// fails, the service rejects the call, or a row cannot be decoded.
    pub async fn fetch(self) -> Result<Vec<DailyBar>, TsError> {
        if !self.params.dates_ordered() {
            return Err(TsError::InvalidDates);
        }
        let resp = self
            .client
            .call_with_retry(self.api, &self.params, &BAR_FIELDS, self.retry_override.as_ref())
            .await?;
        decode_bars(&resp, "pct_chg")
    }
}

/// Decode bar rows. `pct_field` names the percent-change column, which the
/// THS endpoint spells differently.
pub(crate) fn decode_bars(
    resp: &ColumnarResponse,
    pct_field: &str,
) -> Result<Vec<DailyBar>, TsError> {
    let map = resp.field_map();
    let code = map.column("ts_code");
    let date = map.column("trade_date");
    let open = map.column("open");
    let high = map.column("high");
    let low = map.column("low");
    let close = map.column("close");
    let pre_close = map.column("pre_close");
    let change = map.column("change");
    let pct_change = map.column(pct_field);
    let volume = map.column("vol");
    let turnover = map.column("amount");

    resp.rows
        .iter()
        .map(|row| {
            Ok(DailyBar {
                code: code.str(row)?,
                date: date.required_date(row)?,
                open: open.f64(row)?,
                high: high.f64(row)?,
                low: low.f64(row)?,
                close: close.f64(row)?,
                pre_close: pre_close.f64(row)?,
                change: change.f64(row)?,
                pct_change: pct_change.f64(row)?,
                volume: volume.f64(row)?,
                turnover: turnover.f64(row)?,
            })
        })
        .collect()
}
