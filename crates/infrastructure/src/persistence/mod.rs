//! Persistence module
//!
//! SQLite-backed storage for weather records.

pub mod connection;
pub mod migrations;
pub mod weather_store;

pub use connection::{ConnectionPool, DatabaseError, create_pool};
pub use weather_store::SqliteWeatherRecordStore;
