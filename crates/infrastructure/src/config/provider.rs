//! Weather provider configuration.

use integration_openweather::OpenWeatherConfig;
use serde::{Deserialize, Serialize};

/// OpenWeatherMap provider configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API base URL; empty means the client default
    #[serde(default)]
    pub base_url: Option<String>,

    /// API credential (`appid`); required for live fetches
    #[serde(default)]
    pub api_key: String,

    /// Connection timeout in seconds; `None` means the client default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ProviderConfig {
    /// Convert to the integration crate's client configuration
    #[must_use]
    pub fn to_client_config(&self) -> OpenWeatherConfig {
        let defaults = OpenWeatherConfig::default();
        OpenWeatherConfig {
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            api_key: self.api_key.clone(),
            timeout_secs: self.timeout_secs.unwrap_or(defaults.timeout_secs),
        }
    }
}
