//! Route definitions
//!
//! Each (method, path) pair is registered exactly once; axum panics at
//! startup on duplicates, so a second handler can never shadow an
//! earlier one.

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Weather fetch endpoints
        .route("/api/weather", post(handlers::weather::fetch_by_name))
        .route(
            "/api/weather/location",
            get(handlers::weather::fetch_by_coordinates),
        )
        // Export endpoint (store-backed)
        .route(
            "/api/weather/export/{format}",
            get(handlers::export::export_records),
        )
        // Stored record mutations
        .route(
            "/api/weather/{id}",
            put(handlers::records::update_record).delete(handlers::records::delete_record),
        )
        // Attach state
        .with_state(state)
}
