//! OpenWeatherMap weather integration
//!
//! Client for the OpenWeatherMap current-weather API
//! (<https://openweathermap.org/current>). Requires an API key; all
//! requests use metric units.

pub mod client;
mod models;

pub use client::{OpenWeatherClient, OpenWeatherConfig, ProviderError};
pub use models::{CurrentWeatherResponse, Observation};
