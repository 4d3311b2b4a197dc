//! Record export encoding
//!
//! Turns a collection of records into a JSON, CSV, or XML text payload.
//! Format selection happens before this point (`ExportFormat::from_str`),
//! so every call here already has a valid format tag.

use domain::{ExportFormat, WeatherRecord};
use serde::Serialize;
use tracing::instrument;

use crate::error::ApplicationError;

/// Encoded export body plus its MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    /// Encoded text body
    pub body: String,
    /// Matching content type for the HTTP response
    pub content_type: &'static str,
}

/// CSV column order; the nested forecast is flattened to a JSON string,
/// mirroring how the collection was tabulated before.
const CSV_HEADER: [&str; 5] = ["id", "location", "temperature", "condition", "forecast"];

/// Wrapper giving the XML document its fixed `<records>` root, with one
/// `<record>` element per entry.
#[derive(Debug, Serialize)]
#[serde(rename = "records")]
struct XmlDocument<'a> {
    record: &'a [WeatherRecord],
}

/// Encode `records` in the requested format
#[instrument(skip(records), fields(count = records.len(), format = %format))]
pub fn encode_records(
    records: &[WeatherRecord],
    format: ExportFormat,
) -> Result<ExportPayload, ApplicationError> {
    let body = match format {
        ExportFormat::Json => serde_json::to_string(records)
            .map_err(|e| ApplicationError::Export(e.to_string()))?,
        ExportFormat::Csv => encode_csv(records)?,
        ExportFormat::Xml => quick_xml::se::to_string(&XmlDocument { record: records })
            .map_err(|e| ApplicationError::Export(e.to_string()))?,
    };

    Ok(ExportPayload {
        body,
        content_type: format.content_type(),
    })
}

fn encode_csv(records: &[WeatherRecord]) -> Result<String, ApplicationError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(CSV_HEADER)
        .map_err(|e| ApplicationError::Export(e.to_string()))?;

    for record in records {
        let forecast = serde_json::to_string(&record.forecast)
            .map_err(|e| ApplicationError::Export(e.to_string()))?;
        writer
            .write_record([
                record.id.to_string(),
                record.location.clone(),
                record.temperature.to_string(),
                record.condition.clone(),
                forecast,
            ])
            .map_err(|e| ApplicationError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ApplicationError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ApplicationError::Export(e.to_string()))
}
