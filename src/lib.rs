//! tushare-rs: typed async client for the Tushare Pro data API.
//!
//! Tushare exposes every dataset through one JSON POST endpoint taking an
//! API name, a parameter map, and a requested field list, and answering
//! with a columnar payload. This crate wraps that protocol in a shared
//! transport primitive ([`TsClient::call`]) with a bounded fixed-backoff
//! retry loop, a null-safe columnar decoder ([`core::decode`]), and typed
//! per-dataset accessor builders.
//!
//! # Example
//!
//! ```no_run
//! use tushare_rs::{TsClient, daily};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), tushare_rs::TsError> {
//! let token = std::env::var("TUSHARE_TOKEN").expect("set TUSHARE_TOKEN");
//! let client = TsClient::new(token)?;
//!
//! let bars = daily::daily(&client).code("000001.SZ").fetch().await?;
//! for bar in bars {
//!     println!("{} {} close={}", bar.code, bar.date, bar.close);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;

pub mod adjust;
pub mod basic;
pub mod calendar;
pub mod daily;
pub mod fund;
pub mod index;
pub mod moneyflow;
pub mod premarket;
pub mod repurchase;
pub mod ths;

pub use crate::core::{
    Backoff, ColumnarResponse, Params, RetryConfig, TsClient, TsClientBuilder, TsError,
};
pub use adjust::AdjFactor;
pub use basic::StockBasic;
pub use daily::DailyBar;
pub use fund::FundProfile;
pub use index::IndexBasic;
pub use moneyflow::MoneyFlow;
pub use premarket::PreMarket;
pub use repurchase::Repurchase;
pub use ths::{ThsIndex, ThsMember};
