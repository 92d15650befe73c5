//! Share repurchase announcements (`repurchase`).

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::{Params, RetryConfig, TsClient, TsError};

/// One repurchase announcement. The service leaves dates other than the
/// announcement date unset while a program is still pending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Repurchase {
    pub code: String,
    /// Announcement date.
    pub ann_date: Option<NaiveDate>,
    /// Period end date.
    pub end_date: Option<NaiveDate>,
    /// Program expiry date.
    pub exp_date: Option<NaiveDate>,
    /// Progress label as returned on the wire (预案, 股东大会通过, 实施, 完成).
    pub proc: String,
    /// Repurchased volume.
    pub volume: f64,
    /// Repurchased amount.
    pub amount: f64,
    /// Upper bound of the announced price band.
    pub high_limit: f64,
    /// Lower bound of the announced price band.
    pub low_limit: f64,
}

/// Progress stage filter values for repurchase programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepurchaseProc {
    /// 预案
    Planned,
    /// 股东大会通过
    Approved,
    /// 实施
    InProgress,
    /// 完成
    Complete,
}

impl RepurchaseProc {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "预案",
            Self::Approved => "股东大会通过",
            Self::InProgress => "实施",
            Self::Complete => "完成",
        }
    }
}

/// Repurchase announcements (`repurchase`).
#[must_use]
pub fn repurchase(client: &TsClient) -> RepurchaseBuilder {
    RepurchaseBuilder {
        client: client.clone(),
        params: Params::new(),
        retry_override: None,
    }
}

/// A builder for the `repurchase` endpoint.
#[derive(Debug)]
pub struct RepurchaseBuilder {
    client: TsClient,
    params: Params,
    retry_override: Option<RetryConfig>,
}

impl RepurchaseBuilder {
    /// Restrict to one announcement date.
    #[must_use]
    pub fn ann_date(mut self, date: NaiveDate) -> Self {
        self.params.set_date("ann_date", date);
        self
    }

    /// Restrict to an inclusive announcement-date range.
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
    pub async fn fetch(self) -> Result<Vec<Repurchase>, TsError> {
        if !self.params.dates_ordered() {
            return Err(TsError::InvalidDates);
        }
        let resp = self
            .client
            .call_with_retry(
                "repurchase",
                &self.params,
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
                self.retry_override.as_ref(),
            )
            .await?;

        let map = resp.field_map();
        let code = map.column("ts_code");
        let ann_date = map.column("ann_date");
        let end_date = map.column("end_date");
        let exp_date = map.column("exp_date");
        let proc = map.column("proc");
        let volume = map.column("volume");
        let amount = map.column("amount");
        let high_limit = map.column("high_limit");
        let low_limit = map.column("low_limit");

        resp.rows
            .iter()
            .map(|row| {
                Ok(Repurchase {
                    code: code.str(row)?,
                    ann_date: ann_date.date(row)?,
                    end_date: end_date.date(row)?,
                    exp_date: exp_date.date(row)?,
                    proc: proc.str(row)?,
                    volume: volume.f64(row)?,
                    amount: amount.f64(row)?,
                    high_limit: high_limit.f64(row)?,
                    low_limit: low_limit.f64(row)?,
                })
            })
            .collect()
    }
}
