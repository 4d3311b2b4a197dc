//! Weather fetch orchestration and the latest-observation cache
//!
//! The cache is a single slot: every successful fetch replaces it
//! wholesale, a failed fetch leaves it untouched. It lives here (shared
//! through server state) rather than in a process-wide global, and it is
//! never synchronized with the persisted store.

use std::sync::Arc;

use domain::WeatherRecord;
use parking_lot::RwLock;
use tracing::{info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::WeatherProviderPort;

/// Fetches observations from the provider and keeps the most recent record
pub struct WeatherService {
    provider: Arc<dyn WeatherProviderPort>,
    latest: RwLock<Option<WeatherRecord>>,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService")
            .field("provider", &"<WeatherProviderPort>")
            .field("cached", &self.latest.read().is_some())
            .finish()
    }
}

impl WeatherService {
    /// Create a service backed by the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn WeatherProviderPort>) -> Self {
        Self {
            provider,
            latest: RwLock::new(None),
        }
    }

    /// Fetch current weather by place name and replace the cached record
    #[instrument(skip(self))]
    pub async fn fetch_by_name(&self, location: &str) -> Result<WeatherRecord, ApplicationError> {
        let observation = self.provider.observe_by_name(location).await.map_err(|e| {
            warn!(error = %e, "Provider fetch by name failed");
            e
        })?;

        Ok(self.store_observation(observation))
    }

    /// Fetch current weather by coordinates and replace the cached record
    #[instrument(skip(self))]
    pub async fn fetch_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherRecord, ApplicationError> {
        let observation = self
            .provider
            .observe_by_coordinates(latitude, longitude)
            .await
            .map_err(|e| {
                warn!(error = %e, "Provider fetch by coordinates failed");
                e
            })?;

        Ok(self.store_observation(observation))
    }

    /// The most recently fetched record, if any
    #[must_use]
    pub fn latest(&self) -> Option<WeatherRecord> {
        self.latest.read().clone()
    }

    fn store_observation(&self, observation: crate::ports::ProviderObservation) -> WeatherRecord {
        let record = WeatherRecord::from_observation(
            observation.location,
            observation.temperature,
            observation.condition,
        );
        info!(record_id = %record.id, location = %record.location, "Caching fetched weather record");
        *self.latest.write() = Some(record.clone());
        record
    }
}
