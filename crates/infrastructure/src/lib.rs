//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: SQLite persistence
//! for weather records, the OpenWeatherMap provider adapter, and the
//! application configuration.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::OpenWeatherProviderAdapter;
pub use config::{AppConfig, DatabaseConfig, ProviderConfig, ServerConfig};
pub use persistence::{ConnectionPool, SqliteWeatherRecordStore, create_pool};
