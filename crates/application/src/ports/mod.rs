//! Port traits implemented by the infrastructure and integration crates

mod provider_port;
mod record_store;

pub use provider_port::{ProviderObservation, WeatherProviderPort};
pub use record_store::WeatherRecordStore;

#[cfg(test)]
pub use provider_port::MockWeatherProviderPort;
#[cfg(test)]
pub use record_store::MockWeatherRecordStore;
