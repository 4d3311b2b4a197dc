//! Value objects

mod export_format;
mod record_id;

pub use export_format::ExportFormat;
pub use record_id::RecordId;
