//! Stock listings (`stock_basic`).

use serde::Serialize;

use crate::core::{Params, RetryConfig, TsClient, TsError};

/// Basic information about one listed stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockBasic {
    /// Instrument code with exchange suffix, e.g. `000001.SZ`.
    pub code: String,
    /// Bare ticker symbol, e.g. `000001`.
    pub symbol: String,
    pub name: String,
    /// Region.
    pub area: String,
    pub industry: String,
}

/// Market board filter for [`StockBasicBuilder::market`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Market {
    /// 主板
    Main,
    /// 创业板 (ChiNext)
    ChiNext,
    /// 科创板 (STAR)
    Star,
    /// 北交所 (Beijing Stock Exchange)
    Beijing,
}

impl Market {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "主板",
            Self::ChiNext => "创业板",
            Self::Star => "科创板",
            Self::Beijing => "北交所",
        }
    }
}

/// Listing status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// Listed (`L`).
    Listed,
    /// Delisted (`D`).
    Delisted,
    /// Suspended (`P`).
    Suspended,
}

impl ListStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Listed => "L",
            Self::Delisted => "D",
            Self::Suspended => "P",
        }
    }
}

/// Stock exchange filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exchange {
    /// Shanghai Stock Exchange.
    Sse,
    /// Shenzhen Stock Exchange.
    Szse,
    /// Beijing Stock Exchange.
    Bse,
}

impl Exchange {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sse => "SSE",
            Self::Szse => "SZSE",
            Self::Bse => "BSE",
        }
    }
}

/// List stocks (`stock_basic`).
#[must_use]
pub fn stock_basic(client: &TsClient) -> StockBasicBuilder {
    StockBasicBuilder {
        client: client.clone(),
        params: Params::new(),
        retry_override: None,
    }
}

/// A builder for the `stock_basic` endpoint.
#[derive(Debug)]
pub struct StockBasicBuilder {
    client: TsClient,
    params: Params,
    retry_override: Option<RetryConfig>,
}

impl StockBasicBuilder {
    /// Restrict to one instrument code.
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.params.set("ts_code", code.into());
        self
    }

    /// Restrict to one stock name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.params.set("name", name.into());
        self
    }

    /// Restrict to one market board.
    #[must_use]
    pub fn market(mut self, market: Market) -> Self {
        self.params.set("market", market.as_str());
        self
    }

    /// Restrict by listing status.
    #[must_use]
    pub fn list_status(mut self, status: ListStatus) -> Self {
        self.params.set("list_status", status.as_str());
        self
    }

    /// Restrict to one exchange.
    #[must_use]
    pub fn exchange(mut self, exchange: Exchange) -> Self {
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
    pub async fn fetch(self) -> Result<Vec<StockBasic>, TsError> {
        let resp = self
            .client
            .call_with_retry(
                "stock_basic",
                &self.params,
                &["ts_code", "symbol", "name", "area", "industry"],
                self.retry_override.as_ref(),
            )
            .await?;

        let map = resp.field_map();
        let code = map.column("ts_code");
        let symbol = map.column("symbol");
        let name = map.column("name");
        let area = map.column("area");
        let industry = map.column("industry");

        resp.rows
            .iter()
            .map(|row| {
                Ok(StockBasic {
                    code: code.str(row)?,
                    symbol: symbol.str(row)?,
                    name: name.str(row)?,
                    area: area.str(row)?,
                    industry: industry.str(row)?,
                })
            })
            .collect()
    }
}
