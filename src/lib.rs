//! RideFaff - finds where a ride stalled.
//!
//! Detects slow periods and recording gaps in ride telemetry, buckets them
//! by duration and summarises the result for display.

pub mod faff;
pub mod storage;
pub mod telemetry;

// Re-export commonly used types
pub use faff::{analyze, analyze_activity, AnalysisOptions, AnalysisResult, DurationBucket, Interval};
pub use storage::config::AnalysisConfig;
pub use telemetry::{Sample, SessionSummary};
