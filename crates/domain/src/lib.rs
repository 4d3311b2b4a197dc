//! Weathervane domain layer
//!
//! Entities and value objects for weather observations, synthetic
//! forecasts, and export formats. This crate has no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::{
    FORECAST_DAYS, FORECAST_ICON_URL, ForecastEntry, WeatherRecord, synthetic_forecast,
};
pub use errors::DomainError;
pub use value_objects::{ExportFormat, RecordId};
