use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum TsError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body could not be parsed as a valid envelope.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The service rejected the call: the envelope carried a non-zero `code`.
    ///
    /// This is the authoritative failure signal from Tushare (quota exceeded,
    /// invalid parameters, auth failure), returned even with HTTP 200.
    #[error("Tushare error {code}: {msg}")]
    Remote {
        /// The `code` field of the response envelope.
        code: i64,
        /// The server-provided `msg` field.
        msg: String,
    },

    /// A returned value was of an unexpected scalar kind for its target type.
    /// Decode errors are structural and are never retried.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The client was configured without the required credential.
    #[error("Auth error: {0}")]
    Auth(String),

    /// An invalid date range was provided (start must not be after end).
    #[error("invalid date range: start must not be after end")]
    InvalidDates,
}
