//! Integration tests for the SQLite weather record store
#![allow(clippy::expect_used)]

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::WeatherRecordStore;
use domain::{RecordId, WeatherRecord, synthetic_forecast};
use infrastructure::config::DatabaseConfig;
use infrastructure::persistence::{ConnectionPool, SqliteWeatherRecordStore, create_pool};

fn memory_pool() -> Arc<ConnectionPool> {
    let config = DatabaseConfig {
        path: ":memory:".to_string(),
        max_connections: 1,
        run_migrations: true,
    };
    Arc::new(create_pool(&config).expect("pool creation"))
}

fn sample_record(location: &str, temperature: f64) -> WeatherRecord {
    let today = chrono::NaiveDate::from_ymd_opt(2026, 8, 23).expect("valid date");
    WeatherRecord {
        id: RecordId::new(),
        location: location.to_string(),
        temperature,
        condition: "few clouds".to_string(),
        forecast: synthetic_forecast(temperature, today),
    }
}

/// Seed a row directly; nothing in the system itself inserts records.
fn seed_record(pool: &ConnectionPool, record: &WeatherRecord) {
    let conn = pool.get().expect("connection");
    let forecast = serde_json::to_string(&record.forecast).expect("forecast json");
    conn.execute(
        "INSERT INTO weather_data (id, location, temperature, condition, forecast)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![
            record.id.to_string(),
            record.location,
            record.temperature,
            record.condition,
            forecast,
        ],
    )
    .expect("insert");
}

#[tokio::test]
async fn list_all_returns_seeded_rows() {
    let pool = memory_pool();
    let first = sample_record("Berlin", 20.0);
    let second = sample_record("Oslo", 3.5);
    seed_record(&pool, &first);
    seed_record(&pool, &second);

    let store = SqliteWeatherRecordStore::new(pool);
    let records = store.list_all().await.unwrap();

    assert_eq!(records.len(), 2);
    assert!(records.contains(&first));
    assert!(records.contains(&second));
}

#[tokio::test]
async fn list_all_on_empty_table_is_empty() {
    let store = SqliteWeatherRecordStore::new(memory_pool());
    let records = store.list_all().await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn update_temperature_changes_only_matching_row() {
    let pool = memory_pool();
    let target = sample_record("Berlin", 20.0);
    let other = sample_record("Oslo", 3.5);
    seed_record(&pool, &target);
    seed_record(&pool, &other);

    let store = SqliteWeatherRecordStore::new(pool);
    store
        .update_temperature(&target.id.to_string(), -4.0)
        .await
        .unwrap();

    let records = store.list_all().await.unwrap();
    let updated = records.iter().find(|r| r.id == target.id).unwrap();
    let untouched = records.iter().find(|r| r.id == other.id).unwrap();
    assert!((updated.temperature - (-4.0)).abs() < f64::EPSILON);
    assert!((untouched.temperature - 3.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let store = SqliteWeatherRecordStore::new(memory_pool());
    let result = store
        .update_temperature(&RecordId::new().to_string(), 1.0)
        .await;
    assert!(matches!(result, Err(ApplicationError::NotFound(_))));
}

#[tokio::test]
async fn delete_removes_row() {
    let pool = memory_pool();
    let record = sample_record("Berlin", 20.0);
    seed_record(&pool, &record);

    let store = SqliteWeatherRecordStore::new(pool);
    store.delete(&record.id.to_string()).await.unwrap();

    let records = store.list_all().await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let store = SqliteWeatherRecordStore::new(memory_pool());
    let result = store.delete(&RecordId::new().to_string()).await;
    assert!(matches!(result, Err(ApplicationError::NotFound(_))));
}

#[tokio::test]
async fn delete_does_not_touch_other_rows() {
    let pool = memory_pool();
    let keep = sample_record("Lima", 18.0);
    let remove = sample_record("Oslo", 3.5);
    seed_record(&pool, &keep);
    seed_record(&pool, &remove);

    let store = SqliteWeatherRecordStore::new(pool);
    store.delete(&remove.id.to_string()).await.unwrap();

    let records = store.list_all().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, keep.id);
}
