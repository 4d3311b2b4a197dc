//! OpenWeatherMap HTTP client
//!
//! One outbound GET per fetch, metric units, API key as a query
//! parameter. No retry: any transport, status, or parse failure maps to a
//! [`ProviderError`] and the caller decides what to surface.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{CurrentWeatherResponse, Observation};

/// Weather provider client errors
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP client could not be initialized
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the provider failed (transport or non-2xx status)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// OpenWeatherMap client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API credential passed as the `appid` query parameter
    #[serde(default)]
    pub api_key: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

/// OpenWeatherMap HTTP client
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Current weather for a place name (`?q=`)
    #[instrument(skip(self))]
    pub async fn current_by_name(&self, location: &str) -> Result<Observation, ProviderError> {
        self.fetch(&[("q", location.to_string())]).await
    }

    /// Current weather for a latitude/longitude pair (`?lat=&lon=`)
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn current_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Observation, ProviderError> {
        self.fetch(&[
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
        ])
        .await
    }

    async fn fetch(&self, selector: &[(&str, String)]) -> Result<Observation, ProviderError> {
        let url = format!("{}/weather", self.config.base_url);
        debug!(url = %url, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(selector)
            .query(&[
                ("units", "metric"),
                ("appid", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::RequestFailed(format!("HTTP {status}")));
        }

        let payload: CurrentWeatherResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Self::map_response(payload)
    }

    fn map_response(payload: CurrentWeatherResponse) -> Result<Observation, ProviderError> {
        let condition = payload
            .weather
            .first()
            .map(|entry| entry.description.clone())
            .ok_or_else(|| {
                ProviderError::ParseError("No weather condition in response".to_string())
            })?;

        Ok(Observation {
            location: payload.name,
            temperature: payload.main.temp,
            condition,
        })
    }
}
