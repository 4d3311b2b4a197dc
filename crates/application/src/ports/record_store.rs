//! Persisted weather record store port

use async_trait::async_trait;
use domain::WeatherRecord;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Durable store of weather records (`weather_data` table)
///
/// Each operation is a single parameterized statement; there is no
/// transaction spanning calls. The id parameters are plain strings
/// because rows may be seeded externally with arbitrary identifiers.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherRecordStore: Send + Sync {
    /// Set the temperature of the record matching `id`.
    ///
    /// Zero affected rows maps to [`ApplicationError::NotFound`].
    async fn update_temperature(&self, id: &str, temperature: f64)
    -> Result<(), ApplicationError>;

    /// Remove the record matching `id`.
    ///
    /// Zero affected rows maps to [`ApplicationError::NotFound`].
    async fn delete(&self, id: &str) -> Result<(), ApplicationError>;

    /// Every stored record, in natural storage order.
    async fn list_all(&self) -> Result<Vec<WeatherRecord>, ApplicationError>;
}
