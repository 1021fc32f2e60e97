use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Current weather endpoint of the OpenWeatherMap API.
pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Settings for one [`crate::OpenWeatherClient`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// OpenWeatherMap API key, sent as the `appid` query parameter.
    pub api_key: String,

    /// Example TOML:
    /// endpoint = "https://api.openweathermap.org/data/2.5/weather"
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Whole-request timeout in seconds. No timeout when absent.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: default_endpoint(),
            timeout_secs: None,
        }
    }

    /// Parse a config from TOML text supplied by the caller.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let cfg: ClientConfig =
            toml::from_str(contents).context("Failed to parse client configuration")?;

        Ok(cfg)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_endpoint() {
        let cfg = ClientConfig::new("KEY");

        assert_eq!(cfg.api_key, "KEY");
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.timeout_secs, None);
    }

    #[test]
    fn toml_fills_defaults() {
        let cfg = ClientConfig::from_toml_str(r#"api_key = "OPEN_KEY""#).expect("valid toml");

        assert_eq!(cfg.api_key, "OPEN_KEY");
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.timeout_secs, None);
    }

    #[test]
    fn toml_overrides() {
        let cfg = ClientConfig::from_toml_str(
            r#"
            api_key = "OPEN_KEY"
            endpoint = "http://localhost:8080/weather"
            timeout_secs = 5
            "#,
        )
        .expect("valid toml");

        assert_eq!(cfg.endpoint, "http://localhost:8080/weather");
        assert_eq!(cfg.timeout_secs, Some(5));
    }

    #[test]
    fn toml_without_api_key_errors() {
        let err = ClientConfig::from_toml_str("timeout_secs = 5").unwrap_err();

        assert!(err.to_string().contains("Failed to parse client configuration"));
    }

    #[test]
    fn builder_helpers() {
        let cfg = ClientConfig::new("KEY")
            .with_endpoint("http://127.0.0.1:9/weather")
            .with_timeout_secs(3);

        assert_eq!(cfg.endpoint, "http://127.0.0.1:9/weather");
        assert_eq!(cfg.timeout_secs, Some(3));
    }
}
