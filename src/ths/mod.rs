//! Tonghuashun (THS) sector indices: listings (`ths_index`), constituents
//! (`ths_member`), and daily bars (`ths_daily`).

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::{Params, RetryConfig, TsClient, TsError};
use crate::daily::{DailyBar, decode_bars};

/// Basic information about one THS index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThsIndex {
    /// Index code.
    pub code: String,
    pub name: String,
    /// Number of constituents.
    pub count: i64,
    /// Exchange tag as returned on the wire (`A`, `HK`, `US`).
    pub exchange: String,
    /// Launch date; `None` when not reported.
    pub list_date: Option<NaiveDate>,
    /// Index kind tag as returned on the wire (`N`, `I`, `R`, ...).
    pub kind: String,
}

/// One THS index constituent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThsMember {
    /// Index code.
    pub index_code: String,
    /// Constituent stock code.
    pub stock_code: String,
    /// Constituent stock name.
    pub stock_name: String,
}

/// Exchange filter for [`ThsIndexBuilder::exchange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThsExchange {
    /// A shares.
    A,
    /// Hong Kong.
    Hk,
    /// United States.
    Us,
}

impl ThsExchange {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Hk => "HK",
            Self::Us => "US",
        }
    }
}

/// Index kind filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThsIndexKind {
    /// Concept index (`N`).
    Concept,
    /// Sector index (`I`).
    Sector,
    /// Region index (`R`).
    Region,
    /// THS special index (`S`).
    Special,
    /// THS style index (`ST`).
    Style,
    /// THS theme index (`TH`).
    Theme,
    /// THS broad-base index (`BB`).
    BroadBase,
}

impl ThsIndexKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Concept => "N",
            Self::Sector => "I",
            Self::Region => "R",
            Self::Special => "S",
            Self::Style => "ST",
            Self::Theme => "TH",
            Self::BroadBase => "BB",
        }
    }
}

/// List THS indices (`ths_index`).
#[must_use]
pub fn ths_index(client: &TsClient) -> ThsIndexBuilder {
    ThsIndexBuilder {
        client: client.clone(),
        params: Params::new(),
        retry_override: None,
    }
}

/// List THS index constituents (`ths_member`).
#[must_use]
pub fn ths_member(client: &TsClient) -> ThsMemberBuilder {
    ThsMemberBuilder {
        client: client.clone(),
        params: Params::new(),
        retry_override: None,
    }
}

/// Daily THS index bars (`ths_daily`).
///
/// This endpoint reports no traded amount, so [`DailyBar::turnover`] is
/// always zero.
#[must_use]
pub fn ths_daily(client: &TsClient) -> ThsDailyBuilder {
    ThsDailyBuilder {
        client: client.clone(),
        params: Params::new(),
        retry_override: None,
    }
}

/// A builder for the `ths_index` endpoint.
#[derive(Debug)]
pub struct ThsIndexBuilder {
    client: TsClient,
    params: Params,
    retry_override: Option<RetryConfig>,
}

impl ThsIndexBuilder {
    /// Restrict to one index code.
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.params.set("ts_code", code.into());
        self
    }

    /// Restrict to one exchange.
    #[must_use]
    pub fn exchange(mut self, exchange: ThsExchange) -> Self {
        self.params.set("exchange", exchange.as_str());
        self
    }

    /// Restrict to one index kind.
    #[must_use]
    pub fn kind(mut self, kind: ThsIndexKind) -> Self {
        self.params.set("type", kind.as_str());
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
    /// Returns `TsError` if the network request fails, the service rejects
    /// the call, or a row cannot be decoded.
    pub async fn fetch(self) -> Result<Vec<ThsIndex>, TsError> {
        let resp = self
            .client
            .call_with_retry(
                "ths_index",
                &self.params,
                &["ts_code", "name", "count", "exchange", "list_date", "type"],
                self.retry_override.as_ref(),
            )
            .await?;

        let map = resp.field_map();
        let code = map.column("ts_code");
        let name = map.column("name");
        let count = map.column("count");
        let exchange = map.column("exchange");
        let list_date = map.column("list_date");
        let kind = map.column("type");

        resp.rows
            .iter()
            .map(|row| {
                Ok(ThsIndex {
                    code: code.str(row)?,
                    name: name.str(row)?,
                    count: count.i64(row)?,
                    exchange: exchange.str(row)?,
                    list_date: list_date.date(row)?,
                    kind: kind.str(row)?,
                })
            })
            .collect()
    }
}

/// A builder for the `ths_member` endpoint.
#[derive(Debug)]
pub struct ThsMemberBuilder {
    client: TsClient,
    params: Params,
    retry_override: Option<RetryConfig>,
}

impl ThsMemberBuilder {
    /// Restrict to one index code.
    #[must_use]
    pub fn index_code(mut self, code: impl Into<String>) -> Self {
        self.params.set("ts_code", code.into());
        self
    }

    /// Restrict to one constituent stock code.
    #[must_use]
    pub fn stock_code(mut self, code: impl Into<String>) -> Self {
        self.params.set("con_code", code.into());
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
    /// Returns `TsError` if the network request fails, the service rejects
    /// the call, or a row cannot be decoded.
    pub async fn fetch(self) -> Result<Vec<ThsMember>, TsError> {
        let resp = self
            .client
            .call_with_retry(
                "ths_member",
                &self.params,
                &["ts_code", "con_code", "con_name"],
                self.retry_override.as_ref(),
            )
            .await?;

        let map = resp.field_map();
        let index_code = map.column("ts_code");
        let stock_code = map.column("con_code");
        let stock_name = map.column("con_name");

        resp.rows
            .iter()
            .map(|row| {
                Ok(ThsMember {
                    index_code: index_code.str(row)?,
                    stock_code: stock_code.str(row)?,
                    stock_name: stock_name.str(row)?,
                })
            })
            .collect()
    }
}

/// A builder for the `ths_daily` endpoint.
#[derive(Debug)]
pub struct ThsDailyBuilder {
    client: TsClient,
    params: Params,
    retry_override: Option<RetryConfig>,
}

impl ThsDailyBuilder {
    /// Restrict to one index code.
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
            .call_with_retry(
                "ths_daily",
                &self.params,
                &[
                    "ts_code",
                    "trade_date",
                    "open",
                    "high",
                    "low",
                    "close",
                    "pre_close",
                    "change",
                    "pct_change",
                    "vol",
                ],
                self.retry_override.as_ref(),
            )
            .await?;
        decode_bars(&resp, "pct_change")
    }
}
