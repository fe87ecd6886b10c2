//! Tabular export formatting
//!
//! Converts an evaluated batch into a flat CSV byte stream: a header row
//! taken from the first record's field names (in field order), then one data
//! row per record with every value serialized as text. All records in a
//! batch must share the first record's field set; any deviation is a
//! `SchemaMismatch` error.

use crate::domain::errors::PulseError;
use crate::domain::record::EvaluatedRecord;
use crate::domain::result::Result;
use serde_json::Value;
use std::path::Path;

/// Formats an evaluated batch as CSV bytes
pub fn format_batch(records: &[EvaluatedRecord]) -> Result<Vec<u8>> {
    let rows: Vec<Value> = records
        .iter()
        .map(serde_json::to_value)
        .collect::<std::result::Result<_, _>>()?;

    format_rows(&rows)
}

/// Formats pre-serialized rows (flat JSON objects) as CSV bytes
///
/// Exposed separately so the round-trip property (evaluate, format, re-parse)
/// can be checked against raw row data.
pub fn format_rows(rows: &[Value]) -> Result<Vec<u8>> {
    let first = rows.first().ok_or_else(|| {
        PulseError::SchemaMismatch("cannot derive a header from an empty batch".to_string())
    })?;

    let header: Vec<&str> = first
        .as_object()
        .ok_or_else(|| PulseError::SchemaMismatch("batch rows must be flat objects".to_string()))?
        .keys()
        .map(String::as_str)
        .collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&header)?;

    for (index, row) in rows.iter().enumerate() {
        let obj = row.as_object().ok_or_else(|| {
            PulseError::SchemaMismatch(format!("row {index} is not a flat object"))
        })?;

        if obj.len() != header.len() || !header.iter().all(|field| obj.contains_key(*field)) {
            return Err(PulseError::SchemaMismatch(format!(
                "row {index} does not match the field set of the first record"
            )));
        }

        let fields: Vec<String> = header
            .iter()
            .map(|field| render_field(&obj[*field]))
            .collect();
        writer.write_record(&fields)?;
    }

    writer
        .into_inner()
        .map_err(|e| PulseError::Io(format!("failed to flush CSV writer: {e}")))
}

/// Writes a formatted batch to a local file
pub async fn write_batch_file(records: &[EvaluatedRecord], path: &Path) -> Result<()> {
    let bytes = format_batch(records)?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

fn render_field(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
