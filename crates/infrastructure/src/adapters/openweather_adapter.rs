//! OpenWeatherMap provider adapter
//!
//! Bridges the integration crate's client to the application's
//! [`WeatherProviderPort`]. All client errors collapse into
//! [`ApplicationError::Provider`]; the HTTP layer surfaces them as a
//! generic fetch failure.

use application::error::ApplicationError;
use application::ports::{ProviderObservation, WeatherProviderPort};
use async_trait::async_trait;
use integration_openweather::{Observation, OpenWeatherClient, ProviderError};

use crate::config::ProviderConfig;

/// [`WeatherProviderPort`] implementation backed by OpenWeatherMap
#[derive(Debug, Clone)]
pub struct OpenWeatherProviderAdapter {
    client: OpenWeatherClient,
}

impl OpenWeatherProviderAdapter {
    /// Build the adapter from the application's provider configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherClient::new(config.to_client_config())
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }
}

fn into_observation(observation: Observation) -> ProviderObservation {
    ProviderObservation {
        location: observation.location,
        temperature: observation.temperature,
        condition: observation.condition,
    }
}

fn into_application_error(error: ProviderError) -> ApplicationError {
    match error {
        ProviderError::ConnectionFailed(msg)
        | ProviderError::RequestFailed(msg)
        | ProviderError::ParseError(msg) => ApplicationError::Provider(msg),
    }
}

#[async_trait]
impl WeatherProviderPort for OpenWeatherProviderAdapter {
    async fn observe_by_name(
        &self,
        location: &str,
    ) -> Result<ProviderObservation, ApplicationError> {
        self.client
            .current_by_name(location)
            .await
            .map(into_observation)
            .map_err(into_application_error)
    }

    async fn observe_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ProviderObservation, ApplicationError> {
        self.client
            .current_by_coordinates(latitude, longitude)
            .await
            .map(into_observation)
            .map_err(into_application_error)
    }
}
