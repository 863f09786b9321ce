use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::debug;

use crate::{
    Config, Endpoints, GaodeError,
    model::{DetailLevel, WeatherResult},
};

pub mod geocode;
pub mod weather;

/// The two upstream operations a weather lookup is built from.
///
/// Implemented by [`GaodeClient`]; boxed by the tool so tests can substitute
/// their own transport.
#[async_trait]
pub trait GaodeApi: Send + Sync + Debug {
    /// Resolve a free-text city name to an administrative code.
    async fn resolve_adcode(&self, city: &str) -> Result<String, GaodeError>;

    /// Fetch weather for an administrative code at the given detail level.
    async fn fetch_weather(
        &self,
        adcode: &str,
        level: DetailLevel,
    ) -> Result<WeatherResult, GaodeError>;
}

/// HTTP client for the Gaode (Amap) REST API.
#[derive(Debug, Clone)]
pub struct GaodeClient {
    api_key: String,
    http: Client,
    geo_url: String,
    weather_url: String,
}

impl GaodeClient {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoints(api_key, Endpoints::default())
    }

    pub fn with_endpoints(api_key: String, endpoints: Endpoints) -> Self {
        Self {
            api_key,
            http: Client::new(),
            geo_url: endpoints.geo_url,
            weather_url: endpoints.weather_url,
        }
    }

    /// Construct a client from config.
    ///
    /// A missing API key is a configuration error, not a lookup failure.
    pub fn from_config(config: &Config) -> Result<Self, GaodeError> {
        let api_key = config.api_key().ok_or(GaodeError::MissingKey)?;
        Ok(Self::with_endpoints(api_key.to_owned(), config.endpoints.clone()))
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// One GET, decoded once at the boundary into a typed response.
    ///
    /// The query is never logged; it carries the credential.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, GaodeError> {
        debug!(url, "requesting");

        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| GaodeError::Request(e.to_string()))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| GaodeError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(GaodeError::Request(format!(
                "HTTP {status}: {}",
                truncate_body(&body)
            )));
        }

        serde_json::from_str(&body).map_err(|e| GaodeError::Parse(e.to_string()))
    }
}

#[async_trait]
impl GaodeApi for GaodeClient {
    async fn resolve_adcode(&self, city: &str) -> Result<String, GaodeError> {
        self.geocode(city).await
    }

    async fn fetch_weather(
        &self,
        adcode: &str,
        level: DetailLevel,
    ) -> Result<WeatherResult, GaodeError> {
        match level {
            DetailLevel::Current => {
                self.fetch_current(adcode).await.map(WeatherResult::Current)
            }
            DetailLevel::Forecast => {
                self.fetch_forecast(adcode).await.map(WeatherResult::Forecast)
            }
        }
    }
}

fn rejected(info: Option<String>) -> GaodeError {
    GaodeError::Rejected(info.unwrap_or_else(|| "unknown error".to_string()))
}

// Char-based so a cut never lands inside a multi-byte sequence.
fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = GaodeClient::from_config(&cfg).unwrap_err();
        assert!(matches!(err, GaodeError::MissingKey));
    }

    #[test]
    fn from_config_works_when_key_set() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        let client = GaodeClient::from_config(&cfg).expect("client must build");
        assert_eq!(client.api_key(), "KEY");
        assert_eq!(client.geo_url, "https://restapi.amap.com/v3/geocode/geo");
    }

    #[test]
    fn rejected_defaults_to_unknown_error() {
        assert!(rejected(None).to_string().contains("unknown error"));
        assert!(rejected(Some("DAILY_QUERY_OVER_LIMIT".to_string()))
            .to_string()
            .contains("DAILY_QUERY_OVER_LIMIT"));
    }

    #[test]
    fn truncate_body_caps_long_bodies() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);
        assert!(truncated.len() < long.len());
        assert!(truncated.ends_with("..."));

        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_handles_multibyte_text() {
        let long = "晴".repeat(500);
        let truncated = truncate_body(&long);
        assert_eq!(truncated.chars().count(), 203);
    }
}
