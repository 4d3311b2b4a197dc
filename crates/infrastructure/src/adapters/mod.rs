//! Adapters implementing application ports over the integration crates

mod openweather_adapter;

pub use openweather_adapter::OpenWeatherProviderAdapter;
