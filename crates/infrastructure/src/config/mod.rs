//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `database`: SQLite database settings
//! - `provider`: OpenWeatherMap provider settings
//!
//! Values come from defaults, an optional `config.toml`, and environment
//! variables with the `WEATHERVANE` prefix. Nesting uses a double
//! underscore so field names may themselves contain underscores
//! (e.g. `WEATHERVANE_SERVER__PORT`, `WEATHERVANE_PROVIDER__API_KEY`).

mod database;
mod provider;
mod server;

use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use provider::ProviderConfig;
pub use server::ServerConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with_env(Self::env_source())
    }

    /// Environment source with the `WEATHERVANE` prefix.
    ///
    /// The nesting separator is `__` so single underscores stay inside
    /// field names: `WEATHERVANE_PROVIDER__API_KEY` maps to
    /// `provider.api_key`.
    fn env_source() -> config::Environment {
        config::Environment::with_prefix("WEATHERVANE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_env(env: config::Environment) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5001)?
            .set_default("database.path", "weathervane.db")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(env);

        let config = builder.build()?;
        config.try_deserialize()
    }
}
