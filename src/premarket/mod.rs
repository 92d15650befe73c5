//! Pre-market reference data (`stk_premarket`): share counts, previous
//! close, and the day's price limits.

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::{Params, RetryConfig, TsClient, TsError};

/// One pre-market row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreMarket {
    pub code: String,
    pub date: NaiveDate,
    /// Total shares, in 10k.
    pub total_share: f64,
    /// Floating shares, in 10k.
    pub float_share: f64,
    /// Previous close.
    pub pre_close: f64,
    /// Upper price limit.
    pub up_limit: f64,
    /// Lower price limit.
    pub down_limit: f64,
}

/// Pre-market data (`stk_premarket`).
#[must_use]
pub fn premarket(client: &TsClient) -> PreMarketBuilder {
    PreMarketBuilder {
        client: client.clone(),
        params: Params::new(),
        retry_override: None,
    }
}

/// A builder for the `stk_premarket` endpoint.
#[derive(Debug)]
pub struct PreMarketBuilder {
    client: TsClient,
    params: Params,
    retry_override: Option<RetryConfig>,
}

impl PreMarketBuilder {
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
    pub async fn fetch(self) -> Result<Vec<PreMarket>, TsError> {
        if !self.params.dates_ordered() {
            return Err(TsError::InvalidDates);
        }
        let resp = self
            .client
            .call_with_retry(
                "stk_premarket",
                &self.params,
                &[
                    "ts_code",
                    "trade_date",
                    "total_share",
                    "float_share",
                    "pre_close",
                    "up_limit",
                    "down_limit",
                ],
                self.retry_override.as_ref(),
            )
            .await?;

        let map = resp.field_map();
        let code = map.column("ts_code");
        let date = map.column("trade_date");
        let total_share = map.column("total_share");
        let float_share = map.column("float_share");
        let pre_close = map.column("pre_close");
        let up_limit = map.column("up_limit");
        let down_limit = map.column("down_limit");

        resp.rows
            .iter()
            .map(|row| {
                Ok(PreMarket {
                    code: code.str(row)?,
                    date: date.required_date(row)?,
                    total_share: total_share.f64(row)?,
                    float_share: float_share.f64(row)?,
                    pre_close: pre_close.f64(row)?,
                    up_limit: up_limit.f64(row)?,
                    down_limit: down_limit.f64(row)?,
                })
            })
            .collect()
    }
}
