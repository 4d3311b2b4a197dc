//! Weather record entity and synthetic forecast
//!
//! A `WeatherRecord` is a single provider observation plus a synthetic
//! five-day forecast derived from the observed temperature. The forecast
//! is not a real model: entry `i` is simply base temperature plus `i`.

use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::RecordId;

/// Number of entries in every synthetic forecast
pub const FORECAST_DAYS: usize = 5;

/// Placeholder icon shared by all forecast entries
pub const FORECAST_ICON_URL: &str = "http://openweathermap.org/img/wn/01d@2x.png";

/// A single day of the synthetic forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Calendar date, `%Y-%m-%d`
    pub date: String,
    /// Icon reference URL (constant placeholder)
    pub icon: String,
    /// Base temperature plus the day offset, Celsius
    pub temp: f64,
}

/// A weather observation plus its synthetic forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Unique identifier, generated at creation
    pub id: RecordId,
    /// Human-readable place name from the provider
    pub location: String,
    /// Observed temperature, Celsius
    pub temperature: f64,
    /// Short condition description from the provider
    pub condition: String,
    /// Exactly [`FORECAST_DAYS`] entries
    pub forecast: Vec<ForecastEntry>,
}

impl WeatherRecord {
    /// Build a record from a provider observation, generating a fresh id
    /// and the synthetic forecast anchored at today's UTC date.
    #[must_use]
    pub fn from_observation(
        location: impl Into<String>,
        temperature: f64,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            id: RecordId::new(),
            location: location.into(),
            temperature,
            condition: condition.into(),
            forecast: synthetic_forecast(temperature, Utc::now().date_naive()),
        }
    }
}

/// Generate the fixed five-day synthetic forecast.
///
/// Entry `i` (0..5) has date `today + i` days and temperature
/// `base_temp + i`. Deterministic for a given `today`.
#[must_use]
pub fn synthetic_forecast(base_temp: f64, today: NaiveDate) -> Vec<ForecastEntry> {
    (0..FORECAST_DAYS)
        .map(|offset| ForecastEntry {
            date: today
                .checked_add_days(Days::new(offset as u64))
                .unwrap_or(today)
                .format("%Y-%m-%d")
                .to_string(),
            icon: FORECAST_ICON_URL.to_string(),
            temp: base_temp + offset as f64,
        })
        .collect()
}
