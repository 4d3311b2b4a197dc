//! Weather fetch handlers
//!
//! Both endpoints call the upstream provider once and replace the cached
//! record on success. Any upstream failure collapses into the generic
//! 500 fetch message; the cache keeps its previous value.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::{instrument, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for fetching weather by place name
#[derive(Debug, Deserialize)]
pub struct FetchWeatherRequest {
    /// Place name passed to the provider as-is
    pub location: String,
}

/// Query parameters for fetching weather by coordinates
#[derive(Debug, Deserialize)]
pub struct CoordinatesQuery {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// Fetch current weather for a place name
///
/// POST /api/weather
#[instrument(skip(state, request), fields(location = %request.location))]
pub async fn fetch_by_name(
    State(state): State<AppState>,
    Json(request): Json<FetchWeatherRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .weather_service
        .fetch_by_name(&request.location)
        .await
        .map_err(|e| {
            warn!(error = %e, "Weather fetch by name failed");
            ApiError::Internal("Failed to fetch weather data.".to_string())
        })?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// Fetch current weather for a latitude/longitude pair
///
/// GET /api/weather/location
#[instrument(skip(state), fields(lat = %query.latitude, lon = %query.longitude))]
pub async fn fetch_by_coordinates(
    State(state): State<AppState>,
    Query(query): Query<CoordinatesQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .weather_service
        .fetch_by_coordinates(query.latitude, query.longitude)
        .await
        .map_err(|e| {
            warn!(error = %e, "Weather fetch by coordinates failed");
            ApiError::Internal("Failed to fetch weather data.".to_string())
        })?;

    Ok((StatusCode::OK, Json(record)))
}
