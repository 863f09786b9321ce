use thiserror::Error;

/// Failures from the Gaode geocoding and weather endpoints.
#[derive(Debug, Error)]
pub enum GaodeError {
    /// Transport-level failure: connection error, non-2xx HTTP status,
    /// or an unreadable response body.
    #[error("request failed: {0}")]
    Request(String),

    /// The response body was not the expected JSON shape.
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// The service answered with a non-success status code. Carries the
    /// upstream `info` string, e.g. "INVALID_USER_KEY".
    #[error("service rejected the request: {0}")]
    Rejected(String),

    /// The geocoder matched no region for the requested city.
    #[error("no region matched the requested city")]
    NoMatch,

    /// The weather endpoint returned no records at the requested detail level.
    #[error("no weather data for the requested region")]
    NoData,

    /// No API key is configured.
    #[error("no Gaode API key configured")]
    MissingKey,
}
