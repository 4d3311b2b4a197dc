//! Weathervane application layer
//!
//! Orchestrates the upstream provider, the single-slot latest-observation
//! cache, and the persisted record store behind port traits.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{ExportPayload, WeatherService, encode_records};
