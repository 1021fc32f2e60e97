use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the OpenWeatherMap client and its data types.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// A caller-supplied argument was rejected before any request was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Network-level failure (DNS, connection refused, timeout, body read).
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with something other than `200 OK`.
    #[error("OpenWeatherMap request failed with status {status}")]
    RequestFailed { status: StatusCode },

    /// The response body is not a valid current-weather document.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A unit name or symbol outside the supported set.
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::MalformedResponse(err.to_string())
    }
}
