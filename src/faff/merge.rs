//! Coalescing of neighbouring intervals.

use super::interval::{Interval, IntervalKind};
use serde::{Deserialize, Serialize};

/// Slow periods closer than this are merged, ms.
pub const SLOW_MERGE_TOLERANCE_MS: i64 = 60_000;

/// Gaps closer than this are merged, ms.
pub const GAP_MERGE_TOLERANCE_MS: i64 = 60_000;

/// Whether detected intervals are merged before the final sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Merge slow periods and gaps separately, then sort
    #[default]
    MergeBeforeSort,
    /// Sort the detector output as-is
    Raw,
}

/// Combine two same-kind intervals, `later` following `earlier`.
///
/// Returns `None` for a slow period and a gap: those stay separate.
pub fn combine(earlier: &Interval, later: &Interval) -> Option<Interval> {
    let kind = match (&earlier.kind, &later.kind) {
        (IntervalKind::Slow { sample_count: a }, IntervalKind::Slow { sample_count: b }) => {
            IntervalKind::Slow {
                sample_count: a + b,
            }
        }
        (IntervalKind::Gap(a), IntervalKind::Gap(b)) => IntervalKind::Gap(a.combine(b)),
        _ => return None,
    };

    let mut gps_points = earlier.gps_points.clone();
    gps_points.extend(later.gps_points.iter().copied());

    Some(Interval {
        start_time: earlier.start_time,
        end_time: later.end_time,
        start_distance: earlier.start_distance,
        end_distance: later.end_distance,
        gps_points,
        kind,
    })
}

/// Merge a chronologically sorted list.
///
/// Neighbours whose separation (`next.start - current.end`) is below
/// `tolerance_ms` are replaced by one combined interval.
pub fn merge(intervals: Vec<Interval>, tolerance_ms: i64) -> Vec<Interval> {
    if intervals.len() < 2 {
        return intervals;
    }

    let mut merged = Vec::with_capacity(intervals.len());
    let mut iter = intervals.into_iter();
    let Some(mut current) = iter.next() else {
        return merged;
    };

    for next in iter {
        let separation = (next.start_time - current.end_time).num_milliseconds();
        let combined = if separation < tolerance_ms {
            combine(&current, &next)
        } else {
            None
        };
        match combined {
            Some(combined) => current = combined,
            None => merged.push(std::mem::replace(&mut current, next)),
        }
    }
    merged.push(current);

    merged
}
