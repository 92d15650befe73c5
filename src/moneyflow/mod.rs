//! Money-flow statistics per stock and trade date (`moneyflow`).
//!
//! Order sizes follow Tushare's buckets: small (小单), medium (中单),
//! large (大单), and extra-large (特大单).

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::{Params, RetryConfig, TsClient, TsError};

/// One money-flow row. Volumes are in lots, amounts in 10k CNY.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyFlow {
    pub code: String,
    pub date: NaiveDate,
    pub buy_sm_vol: f64,
    pub buy_sm_amount: f64,
    pub sell_sm_vol: f64,
    pub sell_sm_amount: f64,
    pub buy_md_vol: f64,
    pub buy_md_amount: f64,
    pub sell_md_vol: f64,
    pub sell_md_amount: f64,
    pub buy_lg_vol: f64,
    pub buy_lg_amount: f64,
    pub sell_lg_vol: f64,
    pub sell_lg_amount: f64,
    pub buy_elg_vol: f64,
    pub buy_elg_amount: f64,
    pub sell_elg_vol: f64,
    pub sell_elg_amount: f64,
    /// Net inflow volume.
    pub net_mf_vol: f64,
    /// Net inflow amount.
    pub net_mf_amount: f64,
}

const MONEYFLOW_FIELDS: [&str; 20] = [
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
];

/// Money-flow data (`moneyflow`).
#[must_use]
pub fn moneyflow(client: &TsClient) -> MoneyFlowBuilder {
    MoneyFlowBuilder {
        client: client.clone(),
        params: Params::new(),
        retry_override: None,
    }
}

/// A builder for the `moneyflow` endpoint.
#[derive(Debug)]
pub struct MoneyFlowBuilder {
    client: TsClient,
    params: Params,
    retry_override: Option<RetryConfig>,
}

impl MoneyFlowBuilder {
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
    pub async fn fetch(self) -> Result<Vec<MoneyFlow>, TsError> {
        if !self.params.dates_ordered() {
            return Err(TsError::InvalidDates);
        }
        let resp = self
            .client
            .call_with_retry(
                "moneyflow",
                &self.params,
                &MONEYFLOW_FIELDS,
                self.retry_override.as_ref(),
            )
            .await?;

        let map = resp.field_map();
        let code = map.column("ts_code");
        let date = map.column("trade_date");
        let buy_sm_vol = map.column("buy_sm_vol");
        let buy_sm_amount = map.column("buy_sm_amount");
        let sell_sm_vol = map.column("sell_sm_vol");
        let sell_sm_amount = map.column("sell_sm_amount");
        let buy_md_vol = map.column("buy_md_vol");
        let buy_md_amount = map.column("buy_md_amount");
        let sell_md_vol = map.column("sell_md_vol");
        let sell_md_amount = map.column("sell_md_amount");
        let buy_lg_vol = map.column("buy_lg_vol");
        let buy_lg_amount = map.column("buy_lg_amount");
        let sell_lg_vol = map.column("sell_lg_vol");
        let sell_lg_amount = map.column("sell_lg_amount");
        let buy_elg_vol = map.column("buy_elg_vol");
        let buy_elg_amount = map.column("buy_elg_amount");
        let sell_elg_vol = map.column("sell_elg_vol");
        let sell_elg_amount = map.column("sell_elg_amount");
        let net_mf_vol = map.column("net_mf_vol");
        let net_mf_amount = map.column("net_mf_amount");

        resp.rows
            .iter()
            .map(|row| {
                Ok(MoneyFlow {
                    code: code.str(row)?,
                    date: date.required_date(row)?,
                    buy_sm_vol: buy_sm_vol.f64(row)?,
                    buy_sm_amount: buy_sm_amount.f64(row)?,
                    sell_sm_vol: sell_sm_vol.f64(row)?,
                    sell_sm_amount: sell_sm_amount.f64(row)?,
                    buy_md_vol: buy_md_vol.f64(row)?,
                    buy_md_amount: buy_md_amount.f64(row)?,
                    sell_md_vol: sell_md_vol.f64(row)?,
                    sell_md_amount: sell_md_amount.f64(row)?,
                    buy_lg_vol: buy_lg_vol.f64(row)?,
                    buy_lg_amount: buy_lg_amount.f64(row)?,
                    sell_lg_vol: sell_lg_vol.f64(row)?,
                    sell_lg_amount: sell_lg_amount.f64(row)?,
                    buy_elg_vol: buy_elg_vol.f64(row)?,
                    buy_elg_amount: buy_elg_amount.f64(row)?,
                    sell_elg_vol: sell_elg_vol.f64(row)?,
                    sell_elg_amount: sell_elg_amount.f64(row)?,
                    net_mf_vol: net_mf_vol.f64(row)?,
                    net_mf_amount: net_mf_amount.f64(row)?,
                })
            })
            .collect()
    }
}
