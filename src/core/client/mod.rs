//! Public client surface + builder.
//! The retry policy lives in `retry`, endpoint defaults in `constants`.

pub(crate) mod constants;
mod retry;

pub use retry::{Backoff, RetryConfig};

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::core::TsError;
use crate::core::decode::FieldMap;
use crate::core::params::Params;
use crate::core::wire::{ApiRequest, Envelope};
use constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// One decoded response payload: the shared field-name list plus row-major
/// value arrays. Every row has exactly `fields.len()` positions.
#[derive(Debug, Clone)]
pub struct ColumnarResponse {
    /// Field names, positionally aligned with every row.
    pub fields: Vec<String>,
    /// Row-major values; `rows[r][i]` corresponds to `fields[i]`.
    pub rows: Vec<Vec<Value>>,
}

impl ColumnarResponse {
    /// Build the name→position lookup for this response.
    #[must_use]
    pub fn field_map(&self) -> FieldMap {
        FieldMap::new(&self.fields)
    }
}

/// Client for the Tushare Pro API.
///
/// Holds only the pooled HTTP client, the API token, the base URL, and the
/// retry policy; all immutable after construction. Cloning is cheap and a
/// single instance can be shared across tasks.
#[derive(Debug, Clone)]
pub struct TsClient {
    http: Client,
    token: String,
    base_url: Url,
    retry: RetryConfig,
}

impl TsClient {
    /// Create a client with the default configuration for a given API token.
    ///
    /// # Errors
    ///
    /// Returns `TsError` if the underlying HTTP client cannot be constructed.
    pub fn new(token: impl Into<String>) -> Result<Self, TsError> {
        Self::builder().token(token).build()
    }

    /// Create a new builder.
    #[must_use]
    pub fn builder() -> TsClientBuilder {
        TsClientBuilder::default()
    }

    /// Invoke one Tushare API: POST the request body, decode the envelope,
    /// and return the columnar payload.
    ///
    /// Failed attempts are retried per the client's [`RetryConfig`] (by
    /// default up to 10 attempts a minute apart, matching the service's
    /// rate-limit cooldown). The call suspends its task for the full
    /// duration, including retry sleeps; dropping the future cancels it.
    ///
    /// # Errors
    ///
    /// After the retry budget is exhausted, returns the last underlying
    /// error: `Status` for a non-2xx response, `Remote` when the envelope
    /// carries a non-zero `code`, `Json` for an unparseable body, or
    /// `Decode` (never retried) when rows are not aligned with the field
    /// list.
    pub async fn call(
        &self,
        api_name: &str,
        params: &Params,
        fields: &[&str],
    ) -> Result<ColumnarResponse, TsError> {
        self.call_with_retry(api_name, params, fields, None).await
    }

    /// Like [`TsClient::call`], with a one-off retry policy override.
    ///
    /// # Errors
    ///
    /// See [`TsClient::call`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, params, fields, retry_override), err, fields(api = api_name))
    )]
    pub async fn call_with_retry(
        &self,
        api_name: &str,
        params: &Params,
        fields: &[&str],
        retry_override: Option<&RetryConfig>,
    ) -> Result<ColumnarResponse, TsError> {
        let cfg = retry_override.unwrap_or(&self.retry);
        let mut attempt: u32 = 0;
        loop {
            match self.call_once(api_name, params, fields).await {
                Ok(resp) => return Ok(resp),
                Err(err) => {
                    attempt += 1;
                    if !cfg.enabled || attempt > cfg.max_retries || !retryable(&err, cfg) {
                        return Err(err);
                    }
                    #[cfg(feature = "tracing")]
                    tracing::debug!(attempt, error = %err, "retrying after backoff");
                    tokio::time::sleep(cfg.backoff.delay(attempt)).await;
                }
            }
        }
    }

    async fn call_once(
        &self,
        api_name: &str,
        params: &Params,
        fields: &[&str],
    ) -> Result<ColumnarResponse, TsError> {
        let req = ApiRequest {
            api_name,
            token: &self.token,
            params,
            fields: fields.join(","),
        };

        let resp = self
            .http
            .post(self.base_url.clone())
            .json(&req)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TsError::Status {
                status: status.as_u16(),
                url: self.base_url.to_string(),
            });
        }

        let body = resp.text().await?;
        let env: Envelope = serde_json::from_str(&body)?;
        if env.code != 0 {
            return Err(TsError::Remote {
                code: env.code,
                msg: env.msg.unwrap_or_default(),
            });
        }

        let data = env.data.unwrap_or_default();
        for row in &data.items {
            if row.len() != data.fields.len() {
                return Err(TsError::Decode(format!(
                    "row has {} values for {} fields",
                    row.len(),
                    data.fields.len()
                )));
            }
        }

        Ok(ColumnarResponse {
            fields: data.fields,
            rows: data.items,
        })
    }
}

fn retryable(err: &TsError, cfg: &RetryConfig) -> bool {
    match err {
        TsError::Http(_) | TsError::Status { .. } | TsError::Json(_) => true,
        TsError::Remote { .. } => cfg.retry_on_remote,
        TsError::Decode(_) | TsError::Url(_) | TsError::Auth(_) | TsError::InvalidDates => false,
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct TsClientBuilder {
    token: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl TsClientBuilder {
    /// Set the Tushare Pro API token. Required.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Override the API endpoint (e.g., for a mock server in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: 10 seconds.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Override the default retry policy for every call made by the client.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `TsError::Auth` when no token was provided, or an HTTP/URL
    /// error when the underlying client cannot be constructed.
    pub fn build(self) -> Result<TsClient, TsError> {
        let token = self
            .token
            .ok_or_else(|| TsError::Auth("no API token provided".into()))?;
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(concat!(
                "tushare-rs/",
                env!("CARGO_PKG_VERSION")
            )))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(TsClient {
            http,
            token,
            base_url,
            retry: self.retry.unwrap_or_default(),
        })
    }
}
