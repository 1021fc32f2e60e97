use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::{
    config::{ClientConfig, DEFAULT_ENDPOINT},
    error::WeatherError,
    record::WeatherRecord,
};

use super::{Location, WeatherProvider};

/// Client for the OpenWeatherMap "current weather" endpoint.
///
/// Holds only the API key, the endpoint and a reusable HTTP client, so one
/// instance can serve concurrent queries.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http: Client::new(),
        }
    }

    /// Build a client from a full configuration, applying its timeout.
    pub fn from_config(config: ClientConfig) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            api_key: config.api_key,
            endpoint: config.endpoint,
            http: builder.build()?,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Current weather for a place name. An empty name is rejected before
    /// any request is sent.
    #[instrument(level = "debug", skip(self))]
    pub async fn query_city(&self, name: &str) -> Result<WeatherRecord, WeatherError> {
        self.current_weather(&Location::city(name)).await
    }

    /// Current weather at the given coordinates.
    #[instrument(level = "debug", skip(self))]
    pub async fn query_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherRecord, WeatherError> {
        self.current_weather(&Location::coordinates(latitude, longitude)).await
    }

    fn build_url(&self, location: &Location) -> String {
        format!("{}?{}&appid={}", self.endpoint, location.query(), self.api_key)
    }

    async fn fetch(&self, location: &Location) -> Result<WeatherRecord, WeatherError> {
        location.validate()?;

        debug!(%location, "requesting current weather");
        let res = self.http.get(self.build_url(location)).send().await?;

        let status = res.status();
        if status != StatusCode::OK {
            warn!(%location, %status, "OpenWeatherMap request failed");
            return Err(WeatherError::RequestFailed { status });
        }

        let body = res.text().await?;
        debug!(%location, bytes = body.len(), "received current weather");

        WeatherRecord::from_json(&body)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, location: &Location) -> Result<WeatherRecord, WeatherError> {
        self.fetch(location).await
    }
}

/// One-shot lookup by place name with a throwaway client.
pub async fn query_city(api_key: &str, name: &str) -> Result<WeatherRecord, WeatherError> {
    OpenWeatherClient::new(api_key).query_city(name).await
}

/// One-shot lookup by coordinates with a throwaway client.
pub async fn query_coordinates(
    api_key: &str,
    latitude: f64,
    longitude: f64,
) -> Result<WeatherRecord, WeatherError> {
    OpenWeatherClient::new(api_key)
        .query_coordinates(latitude, longitude)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_endpoint() {
        let client = OpenWeatherClient::new("KEY");

        assert_eq!(client.api_key(), "KEY");
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn from_config_keeps_endpoint_and_key() {
        let cfg = ClientConfig::new("KEY")
            .with_endpoint("http://localhost:1234/weather")
            .with_timeout_secs(2);
        let client = OpenWeatherClient::from_config(cfg).expect("client builds");

        assert_eq!(client.api_key(), "KEY");
        assert_eq!(client.endpoint(), "http://localhost:1234/weather");
    }

    #[test]
    fn city_url() {
        let client = OpenWeatherClient::new("KEY");

        assert_eq!(
            client.build_url(&Location::city("New York")),
            "https://api.openweathermap.org/data/2.5/weather?q=New+York&appid=KEY"
        );
    }

    #[test]
    fn coordinates_url() {
        let client = OpenWeatherClient::new("KEY");

        assert_eq!(
            client.build_url(&Location::coordinates(52.5244, 13.4105)),
            "https://api.openweathermap.org/data/2.5/weather?lat=52.5244&lon=13.4105&appid=KEY"
        );
    }

    #[tokio::test]
    async fn one_shot_empty_city_fails_without_network() {
        let err = query_city("KEY", "").await.unwrap_err();
        assert!(matches!(err, WeatherError::InvalidArgument(_)));
    }
}
