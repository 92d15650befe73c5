//! Core components of the `tushare-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`TsClient`], its builder, and the retry policy.
//! - The primary [`TsError`] type.
//! - The columnar decoder ([`decode::FieldMap`] and [`decode::Column`]).
//! - The request parameter map ([`Params`]).

/// The main client (`TsClient`), builder, and retry configuration.
pub mod client;
/// The columnar decoder: field-index mapping and null-safe coercion.
pub mod decode;
/// The primary error type (`TsError`) for the crate.
pub mod error;
/// The request parameter map filled by accessor builders.
pub mod params;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::TsClient`
pub use client::{Backoff, ColumnarResponse, RetryConfig, TsClient, TsClientBuilder};
pub use error::TsError;
pub use params::Params;
