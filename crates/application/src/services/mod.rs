//! Application services

mod export_service;
mod weather_service;

pub use export_service::{ExportPayload, encode_records};
pub use weather_service::WeatherService;
