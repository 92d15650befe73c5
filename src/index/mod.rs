//! Market indices: listings (`index_basic`) and daily bars (`index_daily`).

use serde::Serialize;

use crate::core::{Params, RetryConfig, TsClient, TsError};
use crate::daily::DailyBuilder;

/// Basic information about one index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexBasic {
    /// Index code, e.g. `000300.SH`.
    pub code: String,
    pub name: String,
    pub full_name: String,
    /// Publisher/market tag as returned on the wire (`CSI`, `SSE`, ...).
    pub market: String,
    /// Category label as returned on the wire (规模指数, 行业指数, ...).
    pub category: String,
}

/// Index publisher filter for [`IndexBasicBuilder::market`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexMarket {
    Msci,
    /// 中证指数
    Csi,
    /// 上交所
    Sse,
    /// 深交所
    Szse,
    /// 中金所
    Cicc,
    /// 申万行业
    Sw,
    Other,
}

impl IndexMarket {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Msci => "MSCI",
            Self::Csi => "CSI",
            Self::Sse => "SSE",
            Self::Szse => "SZSE",
            Self::Cicc => "CICC",
            Self::Sw => "SW",
            Self::Other => "OTH",
        }
    }
}

/// Index category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexCategory {
    /// 行业指数
    Sector,
    /// 一级行业指数
    SectorLevel1,
    /// 二级行业指数
    SectorLevel2,
    /// 三级行业指数
    SectorLevel3,
    /// 四级行业指数
    SectorLevel4,
    /// 综合指数
    Composite,
    /// 主题指数
    Theme,
    /// 策略指数
    Strategy,
    /// 规模指数
    Size,
    /// 风格指数
    Style,
    /// 其他
    Other,
}

impl IndexCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sector => "行业指数",
            Self::SectorLevel1 => "一级行业指数",
            Self::SectorLevel2 => "二级行业指数",
            Self::SectorLevel3 => "三级行业指数",
            Self::SectorLevel4 => "四级行业指数",
            Self::Composite => "综合指数",
            Self::Theme => "主题指数",
            Self::Strategy => "策略指数",
            Self::Size => "规模指数",
            Self::Style => "风格指数",
            Self::Other => "其他",
        }
    }
}

/// List indices (`index_basic`).
#[must_use]
pub fn index_basic(client: &TsClient) -> IndexBasicBuilder {
    IndexBasicBuilder {
        client: client.clone(),
        params: Params::new(),
        retry_override: None,
    }
}

/// Daily index bars (`index_daily`).
#[must_use]
pub fn index_daily(client: &TsClient) -> DailyBuilder {
    DailyBuilder::new(client, "index_daily")
}

/// A builder for the `index_basic` endpoint.
#[derive(Debug)]
pub struct IndexBasicBuilder {
    client: TsClient,
    params: Params,
    retry_override: Option<RetryConfig>,
}

impl IndexBasicBuilder {
    /// Restrict to one index code.
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.params.set("ts_code", code.into());
        self
    }

    /// Restrict to one index name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.params.set("name", name.into());
        self
    }

    /// Restrict to one publisher/market.
    #[must_use]
    pub fn market(mut self, market: IndexMarket) -> Self {
        self.params.set("market", market.as_str());
        self
    }

    /// Restrict to one category.
    #[must_use]
    pub fn category(mut self, category: IndexCategory) -> Self {
        self.params.set("category", category.as_str());
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
    pub async fn fetch(self) -> Result<Vec<IndexBasic>, TsError> {
        let resp = self
            .client
            .call_with_retry(
                "index_basic",
                &self.params,
                &["ts_code", "name", "fullname", "market", "category"],
                self.retry_override.as_ref(),
            )
            .await?;

        let map = resp.field_map();
        let code = map.column("ts_code");
        let name = map.column("name");
        let full_name = map.column("fullname");
        let market = map.column("market");
        let category = map.column("category");

        resp.rows
            .iter()
            .map(|row| {
                Ok(IndexBasic {
                    code: code.str(row)?,
                    name: name.str(row)?,
                    full_name: full_name.str(row)?,
                    market: market.str(row)?,
                    category: category.str(row)?,
                })
            })
            .collect()
    }
}
