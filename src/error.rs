use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors produced while fetching, windowing, or summarizing weather data.
///
/// Every fallible operation in this crate returns one of these variants so
/// callers can match on the failure instead of parsing message strings.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure: DNS, TLS, timeout, or a non-success HTTP status.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered, but the payload did not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Geocoding returned no match for the requested city name.
    #[error("no location found for {0:?}")]
    LocationNotFound(String),

    /// A relative window was requested but the series holds no entry at or
    /// before the anchor hour.
    #[error("series has no entry at or before {0}")]
    HourNotFound(NaiveDateTime),

    /// Statistics were requested over an empty value slice.
    #[error("cannot summarize an empty series")]
    EmptyInput,

    /// The given identifier names no known hourly data type.
    #[error("unsupported data type {0:?}")]
    UnsupportedDataType(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::MalformedResponse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
