//! Application state shared across handlers

use std::sync::Arc;

use application::WeatherService;
use application::ports::WeatherRecordStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Weather fetch orchestration plus the latest-observation cache
    pub weather_service: Arc<WeatherService>,
    /// Persisted weather record store
    pub record_store: Arc<dyn WeatherRecordStore>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("weather_service", &self.weather_service)
            .field("record_store", &"<WeatherRecordStore>")
            .finish()
    }
}
