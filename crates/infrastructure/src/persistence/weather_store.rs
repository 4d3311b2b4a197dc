//! SQLite-based weather record persistence

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::WeatherRecordStore;
use async_trait::async_trait;
use domain::{ForecastEntry, WeatherRecord};
use rusqlite::{Row, params};
use tokio::task;
use tracing::{debug, instrument};

use super::connection::ConnectionPool;

/// SQLite-backed implementation of [`WeatherRecordStore`]
///
/// Every call runs its single statement on the blocking thread pool;
/// there are no transactions spanning statements.
#[derive(Debug, Clone)]
pub struct SqliteWeatherRecordStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteWeatherRecordStore {
    /// Create a new store on top of an existing pool
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WeatherRecordStore for SqliteWeatherRecordStore {
    #[instrument(skip(self), fields(record_id = %id))]
    async fn update_temperature(
        &self,
        id: &str,
        temperature: f64,
    ) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let id = id.to_string();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            let affected = conn
                .execute(
                    "UPDATE weather_data SET temperature = ?1 WHERE id = ?2",
                    params![temperature, id],
                )
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            if affected == 0 {
                return Err(ApplicationError::NotFound(format!(
                    "Weather record {id} not found"
                )));
            }

            debug!("Updated weather record temperature");
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self), fields(record_id = %id))]
    async fn delete(&self, id: &str) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let id = id.to_string();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            let affected = conn
                .execute("DELETE FROM weather_data WHERE id = ?1", [&id])
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            if affected == 0 {
                return Err(ApplicationError::NotFound(format!(
                    "Weather record {id} not found"
                )));
            }

            debug!("Deleted weather record");
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<WeatherRecord>, ApplicationError> {
        let pool = Arc::clone(&self.pool);

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            let mut stmt = conn
                .prepare("SELECT id, location, temperature, condition, forecast FROM weather_data")
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            let rows = stmt
                .query_map([], row_to_record)
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            let mut records = Vec::new();
            for row in rows {
                records.push(row.map_err(|e| ApplicationError::Internal(e.to_string()))?);
            }

            debug!(count = records.len(), "Listed weather records");
            Ok(records)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}

/// Map a `weather_data` row to a record, parsing the forecast JSON column
fn row_to_record(row: &Row<'_>) -> rusqlite::Result<WeatherRecord> {
    let id: String = row.get(0)?;
    let forecast_json: String = row.get(4)?;

    let id = id.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let forecast: Vec<ForecastEntry> = serde_json::from_str(&forecast_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(WeatherRecord {
        id,
        location: row.get(1)?,
        temperature: row.get(2)?,
        condition: row.get(3)?,
        forecast,
    })
}
