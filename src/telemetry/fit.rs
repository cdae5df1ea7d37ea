//! FIT activity decoding.
//!
//! Reads `record` messages into [`Sample`]s and the first `session` message
//! into a [`SessionSummary`]. Everything past this module works on plain
//! samples.

use super::{DecodedActivity, Sample, SessionSummary, TelemetryError};
use chrono::{DateTime, Utc};
use fitparser::profile::MesgNum;
use fitparser::Value;
use std::path::Path;

/// Decode a FIT file from disk.
pub fn decode_file(path: &Path) -> Result<DecodedActivity, TelemetryError> {
    let content = std::fs::read(path)?;
    decode(&content)
}

/// Decode FIT file content into samples and session totals.
pub fn decode(content: &[u8]) -> Result<DecodedActivity, TelemetryError> {
    let fit_data = fitparser::from_bytes(content)
        .map_err(|e| TelemetryError::ParseError(format!("FIT parse error: {}", e)))?;

    let mut samples = Vec::new();
    let mut session: Option<SessionSummary> = None;

    for record in fit_data {
        match record.kind() {
            MesgNum::Record => {
                let mut sample = Sample::default();
                for field in record.fields() {
                    match field.name() {
                        "timestamp" => sample.timestamp = value_as_time(field.value()),
                        "speed" => sample.speed = value_as_f64(field.value()),
                        "enhanced_speed" => sample.enhanced_speed = value_as_f64(field.value()),
                        "distance" => sample.distance = value_as_f64(field.value()),
                        "position_lat" => sample.position_lat = value_as_i32(field.value()),
                        "position_long" => sample.position_long = value_as_i32(field.value()),
                        _ => {}
                    }
                }
                samples.push(sample);
            }
            MesgNum::Session if session.is_none() => {
                let mut summary = SessionSummary::default();
                for field in record.fields() {
                    match field.name() {
                        "start_time" => summary.start_time = value_as_time(field.value()),
                        "total_timer_time" => {
                            summary.total_timer_time_s = value_as_f64(field.value())
                        }
                        "total_elapsed_time" => {
                            summary.total_elapsed_time_s = value_as_f64(field.value())
                        }
                        "total_distance" => summary.total_distance_m = value_as_f64(field.value()),
                        _ => {}
                    }
                }
                session = Some(summary);
            }
            _ => {}
        }
    }

    if samples.is_empty() {
        return Err(TelemetryError::NoRecords);
    }

    tracing::debug!(
        "Decoded {} records (session summary: {})",
        samples.len(),
        session.is_some()
    );

    Ok(DecodedActivity {
        samples,
        session: session.unwrap_or_default(),
    })
}

fn value_as_time(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Timestamp(t) => Some((*t).into()),
        _ => None,
    }
}

fn value_as_i32(value: &Value) -> Option<i32> {
    match value {
        Value::SInt32(v) => Some(*v),
        _ => None,
    }
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Float64(v) => Some(*v),
        Value::Float32(v) => Some(f64::from(*v)),
        Value::UInt8(v) | Value::UInt8z(v) | Value::Byte(v) => Some(f64::from(*v)),
        Value::SInt8(v) => Some(f64::from(*v)),
        Value::UInt16(v) | Value::UInt16z(v) => Some(f64::from(*v)),
        Value::SInt16(v) => Some(f64::from(*v)),
        Value::UInt32(v) | Value::UInt32z(v) => Some(f64::from(*v)),
        Value::SInt32(v) => Some(f64::from(*v)),
        Value::UInt64(v) | Value::UInt64z(v) => Some(*v as f64),
        Value::SInt64(v) => Some(*v as f64),
        _ => None,
    }
}
