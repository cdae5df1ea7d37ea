//! Unified interval type shared by slow periods and recording gaps.

use super::coords::GpsPoint;
use super::gaps::Gap;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// What kind of faff an interval records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IntervalKind {
    /// Run of samples below the speed threshold
    Slow { sample_count: usize },
    /// Stretch with no samples at all
    Gap(Gap),
}

/// A detected faff interval.
///
/// The header fields are common to both kinds; gap-only detail lives in
/// [`IntervalKind::Gap`]. Intervals are never edited in place: merging
/// builds a new one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interval {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Cumulative distance at the start, meters
    pub start_distance: f64,
    /// Cumulative distance at the end, meters
    pub end_distance: f64,
    /// Positions inside the interval, in order
    pub gps_points: Vec<GpsPoint>,
    pub kind: IntervalKind,
}

impl Interval {
    /// Build a slow period.
    pub fn slow(
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        sample_count: usize,
        start_distance: f64,
        end_distance: f64,
        gps_points: Vec<GpsPoint>,
    ) -> Self {
        Self {
            start_time,
            end_time,
            start_distance,
            end_distance,
            gps_points,
            kind: IntervalKind::Slow { sample_count },
        }
    }

    /// Wrap a gap, keeping whichever boundary positions exist.
    pub fn from_gap(gap: Gap) -> Self {
        let gps_points = gap
            .start_gps_point
            .into_iter()
            .chain(gap.end_gps_point)
            .collect();
        Self {
            start_time: gap.start_time,
            end_time: gap.end_time,
            start_distance: gap.start_distance,
            end_distance: gap.end_distance,
            gps_points,
            kind: IntervalKind::Gap(gap),
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self.kind, IntervalKind::Gap(_))
    }

    /// Samples inside the interval; always 0 for gaps.
    pub fn sample_count(&self) -> usize {
        match self.kind {
            IntervalKind::Slow { sample_count } => sample_count,
            IntervalKind::Gap(_) => 0,
        }
    }

    pub fn gap_detail(&self) -> Option<&Gap> {
        match &self.kind {
            IntervalKind::Gap(gap) => Some(gap),
            IntervalKind::Slow { .. } => None,
        }
    }

    pub fn duration_ms(&self) -> i64 {
        (self.end_time - self.start_time).num_milliseconds()
    }

    /// Unrounded duration in minutes.
    pub fn duration_minutes(&self) -> f64 {
        self.duration_ms() as f64 / 60_000.0
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_minutes() / 60.0
    }

    /// Duration rounded to whole seconds, floored at zero.
    pub fn rounded_seconds(&self) -> i64 {
        ((self.duration_ms() as f64 / 1000.0).round() as i64).max(0)
    }

    /// Distance covered during the interval, meters.
    pub fn distance(&self) -> f64 {
        self.end_distance - self.start_distance
    }
}
