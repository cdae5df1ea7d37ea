//! Telemetry samples and the FIT decoding adapter that produces them.

pub mod fit;
pub mod types;

pub use types::{DecodedActivity, Sample, SessionSummary, TelemetryError};
