//! Upstream weather provider port

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// A single observation as reported by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderObservation {
    /// Resolved place name
    pub location: String,
    /// Current temperature in Celsius (metric units requested)
    pub temperature: f64,
    /// Short condition description
    pub condition: String,
}

/// Outbound interface to the weather provider
///
/// One call per fetch; no retry. Any transport, status, or parse failure
/// surfaces as [`ApplicationError::Provider`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherProviderPort: Send + Sync {
    /// Current weather for a place name
    async fn observe_by_name(&self, location: &str)
    -> Result<ProviderObservation, ApplicationError>;

    /// Current weather for a latitude/longitude pair
    async fn observe_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ProviderObservation, ApplicationError>;
}
