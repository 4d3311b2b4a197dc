//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::Arc;

use application::{
    WeatherService,
    error::ApplicationError,
    ports::{ProviderObservation, WeatherProviderPort, WeatherRecordStore},
};
use async_trait::async_trait;
use axum_test::TestServer;
use domain::WeatherRecord;
use presentation_http::{routes::create_router, state::AppState};
use serde_json::json;
use tokio::sync::RwLock;

/// Stub provider that always reports the same observation
struct StubProvider {
    observation: ProviderObservation,
    fail: bool,
}

impl StubProvider {
    fn new() -> Self {
        Self {
            observation: ProviderObservation {
                location: "Berlin".to_string(),
                temperature: 21.5,
                condition: "scattered clouds".to_string(),
            },
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }
}

#[async_trait]
impl WeatherProviderPort for StubProvider {
    async fn observe_by_name(
        &self,
        _location: &str,
    ) -> Result<ProviderObservation, ApplicationError> {
        if self.fail {
            return Err(ApplicationError::Provider("connection refused".to_string()));
        }
        Ok(self.observation.clone())
    }

    async fn observe_by_coordinates(
        &self,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<ProviderObservation, ApplicationError> {
        self.observe_by_name("").await
    }
}

/// In-memory record store standing in for the SQLite adapter
struct StubStore {
    records: RwLock<Vec<WeatherRecord>>,
}

impl StubStore {
    fn new(records: Vec<WeatherRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl WeatherRecordStore for StubStore {
    async fn update_temperature(
        &self,
        id: &str,
        temperature: f64,
    ) -> Result<(), ApplicationError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id.to_string() == id) {
            Some(record) => {
                record.temperature = temperature;
                Ok(())
            },
            None => Err(ApplicationError::NotFound(format!(
                "Weather record {id} not found"
            ))),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), ApplicationError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id.to_string() != id);
        if records.len() == before {
            return Err(ApplicationError::NotFound(format!(
                "Weather record {id} not found"
            )));
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<WeatherRecord>, ApplicationError> {
        Ok(self.records.read().await.clone())
    }
}

fn create_test_server_with(provider: StubProvider, records: Vec<WeatherRecord>) -> TestServer {
    let provider: Arc<dyn WeatherProviderPort> = Arc::new(provider);
    let state = AppState {
        weather_service: Arc::new(WeatherService::new(provider)),
        record_store: Arc::new(StubStore::new(records)),
    };
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

fn create_test_server() -> TestServer {
    create_test_server_with(StubProvider::new(), Vec::new())
}

fn seeded_records() -> Vec<WeatherRecord> {
    vec![
        WeatherRecord::from_observation("Berlin", 21.5, "scattered clouds"),
        WeatherRecord::from_observation("Oslo", 3.0, "light snow"),
    ]
}

// ============ Health Endpoint Tests ============

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

// ============ Fetch Endpoint Tests ============

#[tokio::test]
async fn fetch_by_name_returns_created_record() {
    let server = create_test_server();

    let response = server
        .post("/api/weather")
        .json(&json!({ "location": "Berlin" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["location"], "Berlin");
    assert_eq!(body["condition"], "scattered clouds");
    assert_eq!(body["forecast"].as_array().expect("forecast array").len(), 5);
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn fetch_by_name_provider_failure_returns_generic_500() {
    let server = create_test_server_with(StubProvider::failing(), Vec::new());

    let response = server
        .post("/api/weather")
        .json(&json!({ "location": "Berlin" }))
        .await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Failed to fetch weather data.");
}

#[tokio::test]
async fn fetch_by_coordinates_returns_record() {
    let server = create_test_server();

    let response = server
        .get("/api/weather/location")
        .add_query_param("latitude", "52.52")
        .add_query_param("longitude", "13.405")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["location"], "Berlin");
    assert_eq!(body["forecast"].as_array().expect("forecast array").len(), 5);
}

#[tokio::test]
async fn fetch_by_coordinates_provider_failure_returns_generic_500() {
    let server = create_test_server_with(StubProvider::failing(), Vec::new());

    let response = server
        .get("/api/weather/location")
        .add_query_param("latitude", "52.52")
        .add_query_param("longitude", "13.405")
        .await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Failed to fetch weather data.");
}

// ============ Record Mutation Tests ============

#[tokio::test]
async fn update_temperature_returns_confirmation() {
    let records = seeded_records();
    let id = records[0].id.to_string();
    let server = create_test_server_with(StubProvider::new(), records);

    let response = server
        .put(&format!("/api/weather/{id}"))
        .json(&json!({ "temperature": 30.0 }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Weather record updated successfully.");
}

#[tokio::test]
async fn update_unknown_record_returns_404() {
    let server = create_test_server_with(StubProvider::new(), seeded_records());

    let response = server
        .put("/api/weather/no-such-id")
        .json(&json!({ "temperature": 30.0 }))
        .await;

    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_record_returns_no_content() {
    let records = seeded_records();
    let id = records[1].id.to_string();
    let server = create_test_server_with(StubProvider::new(), records);

    let response = server.delete(&format!("/api/weather/{id}")).await;

    response.assert_status(axum::http::StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn delete_unknown_record_returns_404() {
    let server = create_test_server_with(StubProvider::new(), seeded_records());

    let response = server.delete("/api/weather/no-such-id").await;

    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

// ============ Export Endpoint Tests ============

#[tokio::test]
async fn export_json_returns_stored_records() {
    let server = create_test_server_with(StubProvider::new(), seeded_records());

    let response = server.get("/api/weather/export/json").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "application/json");
    let body: serde_json::Value = response.json();
    let records = body.as_array().expect("JSON array");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["location"], "Berlin");
}

#[tokio::test]
async fn export_json_with_empty_store_returns_empty_array() {
    let server = create_test_server();

    let response = server.get("/api/weather/export/json").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "[]");
}

#[tokio::test]
async fn export_csv_returns_header_and_rows() {
    let server = create_test_server_with(StubProvider::new(), seeded_records());

    let response = server.get("/api/weather/export/csv").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "text/csv");
    let body = response.text();
    let mut lines = body.lines();
    assert_eq!(
        lines.next(),
        Some("id,location,temperature,condition,forecast")
    );
    assert_eq!(lines.count(), 2);
}

#[tokio::test]
async fn export_xml_wraps_records_in_root_element() {
    let server = create_test_server_with(StubProvider::new(), seeded_records());

    let response = server.get("/api/weather/export/xml").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "application/xml");
    let body = response.text();
    assert!(body.contains("<records>"));
    assert!(body.contains("Berlin"));
}

#[tokio::test]
async fn export_unknown_format_returns_400() {
    let server = create_test_server_with(StubProvider::new(), seeded_records());

    let response = server.get("/api/weather/export/yaml").await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid export format");
}
