//! Exchange-traded funds: listings (`fund_basic`, `etf_basic`) and daily
//! bars (`fund_daily`, `etf_daily`). Both listing endpoints share one
//! columnar shape and decode into [`FundProfile`].

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::{Params, RetryConfig, TsClient, TsError};
use crate::daily::DailyBuilder;

/// Basic information about one fund or ETF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FundProfile {
    /// Fund code, e.g. `510300.SH`.
    pub code: String,
    pub name: String,
    /// Code of the tracked index, when any.
    pub index_code: String,
    /// Name of the tracked index, when any.
    pub index_name: String,
    /// Listing date; `None` when not yet listed.
    pub list_date: Option<NaiveDate>,
    /// Listing status as returned on the wire (`L`, `D`, `P`).
    pub status: String,
    /// Exchange as returned on the wire (`SSE`, `SZ`).
    pub exchange: String,
}

/// Fund listing status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundStatus {
    /// Listed (`L`).
    Listed,
    /// Delisted (`D`).
    Delisted,
    /// Pending listing (`P`).
    Pending,
}

impl FundStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Listed => "L",
            Self::Delisted => "D",
            Self::Pending => "P",
        }
    }
}

/// Fund exchange filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundExchange {
    /// Shanghai Stock Exchange.
    Sse,
    /// Shenzhen Stock Exchange.
    Sz,
}

impl FundExchange {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sse => "SSE",
            Self::Sz => "SZ",
        }
    }
}

/// List funds (`fund_basic`).
#[must_use]
pub fn fund_basic(client: &TsClient) -> FundProfileBuilder {
    FundProfileBuilder::new(client, "fund_basic")
}

/// List ETFs (`etf_basic`).
#[must_use]
pub fn etf_basic(client: &TsClient) -> FundProfileBuilder {
    FundProfileBuilder::new(client, "etf_basic")
}

/// Daily fund bars (`fund_daily`).
#[must_use]
pub fn fund_daily(client: &TsClient) -> DailyBuilder {
    DailyBuilder::new(client, "fund_daily")
}

/// Daily ETF bars (`etf_daily`).
#[must_use]
pub fn etf_daily(client: &TsClient) -> DailyBuilder {
    DailyBuilder::new(client, "etf_daily")
}

/// A builder for the fund/ETF listing endpoints.
#[derive(Debug)]
pub struct FundProfileBuilder {
    client: TsClient,
    api: &'static str,
    params: Params,
    retry_override: Option<RetryConfig>,
}

impl FundProfileBuilder {
    fn new(client: &TsClient, api: &'static str) -> Self {
        Self {
            client: client.clone(),
            api,
            params: Params::new(),
            retry_override: None,
        }
    }

    /// Restrict to one fund code.
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.params.set("ts_code", code.into());
        self
    }

    /// Restrict to funds tracking one index code.
    #[must_use]
    pub fn index_code(mut self, code: impl Into<String>) -> Self {
        self.params.set("index_code", code.into());
        self
    }

    /// Restrict to one listing date.
    #[must_use]
    pub fn list_date(mut self, date: NaiveDate) -> Self {
        self.params.set_date("list_date", date);
        self
    }

    /// Restrict by listing status.
    #[must_use]
    pub fn status(mut self, status: FundStatus) -> Self {
        self.params.set("list_status", status.as_str());
        self
    }

    /// Restrict to one exchange.
    #[must_use]
    pub fn exchange(mut self, exchange: FundExchange) -> Self {
        self.params.set("exchange", exchange.as_str());
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
    pub async fn fetch(self) -> Result<Vec<FundProfile>, TsError> {
        let resp = self
            .client
            .call_with_retry(
                self.api,
                &self.params,
                &[
                    "ts_code",
                    "csname",
                    "index_code",
                    "index_name",
                    "list_date",
                    "list_status",
                    "exchange",
                ],
                self.retry_override.as_ref(),
            )
            .await?;

        let map = resp.field_map();
        let code = map.column("ts_code");
        let name = map.column("csname");
        let index_code = map.column("index_code");
        let index_name = map.column("index_name");
        let list_date = map.column("list_date");
        let status = map.column("list_status");
        let exchange = map.column("exchange");

        resp.rows
            .iter()
            .map(|row| {
                Ok(FundProfile {
                    code: code.str(row)?,
                    name: name.str(row)?,
                    index_code: index_code.str(row)?,
                    index_name: index_name.str(row)?,
                    list_date: list_date.date(row)?,
                    status: status.str(row)?,
                    exchange: exchange.str(row)?,
                })
            })
            .collect()
    }
}
