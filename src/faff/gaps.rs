//! Recording gap detection.
//!
//! A gap is a pair of consecutive samples whose timestamps are further apart
//! than the threshold, meaning nothing was recorded in between.

use super::coords::GpsPoint;
use crate::telemetry::Sample;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stretch of time with no recorded samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gap {
    /// Timestamp of the sample before the gap
    pub start_time: DateTime<Utc>,
    /// Timestamp of the sample after the gap
    pub end_time: DateTime<Utc>,
    pub duration_ms: i64,
    /// Rounded to whole minutes
    pub duration_minutes: i64,
    /// Derived from the rounded minutes
    pub duration_hours: f64,
    /// Distance at the sample before, 0 if unknown
    pub start_distance: f64,
    /// Distance at the sample after, 0 if unknown
    pub end_distance: f64,
    pub start_gps_point: Option<GpsPoint>,
    pub end_gps_point: Option<GpsPoint>,
}

impl Gap {
    /// Build a gap between two instants, deriving the duration fields.
    pub fn between(
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        start_distance: f64,
        end_distance: f64,
        start_gps_point: Option<GpsPoint>,
        end_gps_point: Option<GpsPoint>,
    ) -> Self {
        let duration_ms = (end_time - start_time).num_milliseconds();
        let duration_minutes = (duration_ms as f64 / 60_000.0).round() as i64;
        Self {
            start_time,
            end_time,
            duration_ms,
            duration_minutes,
            // Hours come from the rounded minutes, not from milliseconds.
            duration_hours: duration_minutes as f64 / 60.0,
            start_distance,
            end_distance,
            start_gps_point,
            end_gps_point,
        }
    }

    fn from_samples(
        prev: &Sample,
        next: &Sample,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self::between(
            start_time,
            end_time,
            prev.distance.unwrap_or(0.0),
            next.distance.unwrap_or(0.0),
            GpsPoint::from_sample(prev),
            GpsPoint::from_sample(next),
        )
    }

    /// Combine two gaps into one spanning both.
    pub fn combine(&self, later: &Gap) -> Gap {
        Gap::between(
            self.start_time,
            later.end_time,
            self.start_distance,
            later.end_distance,
            self.start_gps_point,
            later.end_gps_point,
        )
    }
}

/// Find every gap longer than `threshold_ms`.
///
/// Each sample is compared only with its immediate predecessor. A pair where
/// either side lacks a timestamp is skipped without resetting the scan. A
/// gap exactly equal to the threshold is not reported.
pub fn find_gaps(samples: &[Sample], threshold_ms: i64) -> Vec<Gap> {
    let gaps: Vec<Gap> = samples
        .windows(2)
        .filter_map(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            let (start, end) = (prev.timestamp?, next.timestamp?);
            let delta_ms = (end - start).num_milliseconds();
            (delta_ms > threshold_ms).then(|| Gap::from_samples(prev, next, start, end))
        })
        .collect();

    tracing::debug!(
        "Found {} recording gaps over {}ms in {} samples",
        gaps.len(),
        threshold_ms,
        samples.len()
    );
    gaps
}
