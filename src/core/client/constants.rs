//! Centralized constants for the default endpoint and retry policy.

use std::time::Duration;

/// The single Tushare Pro HTTP endpoint. Every API call is a POST here.
pub(crate) const DEFAULT_BASE_URL: &str = "http://api.tushare.pro";

/// Overall request timeout applied when the builder does not set one.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default pause between attempts; Tushare's typical rate-limit cooldown.
pub(crate) const DEFAULT_BACKOFF: Duration = Duration::from_secs(60);

/// Default retry count. Total attempts are `DEFAULT_MAX_RETRIES + 1` = 10.
pub(crate) const DEFAULT_MAX_RETRIES: u32 = 9;

/// Date format used on the wire, both in parameters and in returned columns.
pub(crate) const WIRE_DATE_FORMAT: &str = "%Y%m%d";
