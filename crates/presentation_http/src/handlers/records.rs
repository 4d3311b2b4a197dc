//! Stored record mutation handlers
//!
//! These operate only on the persisted store and never touch the
//! in-memory cache.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for updating a record's temperature
#[derive(Debug, Deserialize)]
pub struct UpdateTemperatureRequest {
    /// New temperature in Celsius
    pub temperature: f64,
}

/// Response for a successful update
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    /// Confirmation message
    pub message: String,
}

/// Update the temperature of a stored record
///
/// PUT /api/weather/{id}
#[instrument(skip(state, request), fields(record_id = %id))]
pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTemperatureRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .record_store
        .update_temperature(&id, request.temperature)
        .await?;

    Ok((
        StatusCode::OK,
        Json(UpdateResponse {
            message: "Weather record updated successfully.".to_string(),
        }),
    ))
}

/// Delete a stored record
///
/// DELETE /api/weather/{id}
#[instrument(skip(state), fields(record_id = %id))]
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.record_store.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
