//! Trading calendar (`trade_cal`).

use chrono::NaiveDate;

use crate::core::{Params, RetryConfig, TsClient, TsError};

/// Trading days within an inclusive date range (`trade_cal`).
///
/// Only days the exchange is open are returned.
#[must_use]
pub fn trade_cal(client: &TsClient, start: NaiveDate, end: NaiveDate) -> TradeCalBuilder {
    let mut params = Params::new();
    params.set_date_range(start, end);
    params.set("is_open", "1");
    TradeCalBuilder {
        client: client.clone(),
        params,
        retry_override: None,
    }
}

/// A builder for the `trade_cal` endpoint.
#[derive(Debug)]
pub struct TradeCalBuilder {
    client: TsClient,
    params: Params,
    retry_override: Option<RetryConfig>,
}

impl TradeCalBuilder {
    /// Restrict to one exchange calendar (default is SSE).
    #[must_use]
    pub fn exchange(mut self, exchange: impl Into<String>) -> Self {
        self.params.set("exchange", exchange.into());
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
    pub async fn fetch(self) -> Result<Vec<NaiveDate>, TsError> {
        if !self.params.dates_ordered() {
            return Err(TsError::InvalidDates);
        }
        let resp = self
            .client
            .call_with_retry(
                "trade_cal",
                &self.params,
                &["cal_date"],
                self.retry_override.as_ref(),
            )
            .await?;

        let cal_date = resp.field_map().column("cal_date");
        resp.rows
            .iter()
            .map(|row| cal_date.required_date(row))
            .collect()
    }
}
