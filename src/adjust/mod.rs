//! Price adjustment factors (`adj_factor`).

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::{Params, RetryConfig, TsClient, TsError};

/// One adjustment-factor row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjFactor {
    /// Instrument code.
    pub code: String,
    /// Trade date.
    pub date: NaiveDate,
    /// Cumulative adjustment factor.
    pub factor: f64,
}

/// Adjustment factors (`adj_factor`).
#[must_use]
pub fn adj_factor(client: &TsClient) -> AdjFactorBuilder {
    AdjFactorBuilder {
        client: client.clone(),
        params: Params::new(),
        retry_override: None,
    }
}

/// A builder for the `adj_factor` endpoint.
#[derive(Debug)]
pub struct AdjFactorBuilder {
    client: TsClient,
    params: Params,
    retry_override: Option<RetryConfig>,
}

impl AdjFactorBuilder {
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
    pub async fn fetch(self) -> Result<Vec<AdjFactor>, TsError> {
        if !self.params.dates_ordered() {
            return Err(TsError::InvalidDates);
        }
        let resp = self
            .client
            .call_with_retry(
                "adj_factor",
                &self.params,
                &["ts_code", "trade_date", "adj_factor"],
                self.retry_override.as_ref(),
            )
            .await?;

        let map = resp.field_map();
        let code = map.column("ts_code");
        let date = map.column("trade_date");
        let factor = map.column("adj_factor");

        resp.rows
            .iter()
            .map(|row| {
                Ok(AdjFactor {
                    code: code.str(row)?,
                    date: date.required_date(row)?,
                    factor: factor.f64(row)?,
                })
            })
            .collect()
    }
}
