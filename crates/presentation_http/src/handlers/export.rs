//! Record export handler
//!
//! Reads the persisted store and encodes every row in the requested
//! format. The format tag is the only content negotiation; headers are
//! ignored.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use domain::ExportFormat;
use tracing::{instrument, warn};

use application::encode_records;

use crate::error::ApiError;
use crate::state::AppState;

/// Export all stored records in the given format
///
/// GET /api/weather/export/{format}
#[instrument(skip(state), fields(format = %format))]
pub async fn export_records(
    State(state): State<AppState>,
    Path(format): Path<String>,
) -> Result<Response, ApiError> {
    let format: ExportFormat = format
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid export format".to_string()))?;

    let records = state.record_store.list_all().await.map_err(|e| {
        warn!(error = %e, "Failed to read records for export");
        ApiError::Internal("Failed to export weather data.".to_string())
    })?;

    let payload = encode_records(&records, format).map_err(|e| {
        warn!(error = %e, "Failed to encode export payload");
        ApiError::Internal("Failed to export weather data.".to_string())
    })?;

    Ok((
        [(header::CONTENT_TYPE, payload.content_type)],
        payload.body,
    )
        .into_response())
}
