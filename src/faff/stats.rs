//! Summary statistics over a unified interval list.

use super::buckets::DurationBucket;
use super::interval::Interval;
use serde::Serialize;

/// Per-bucket totals for slow periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeBreakdownEntry {
    pub bucket: DurationBucket,
    pub label: String,
    /// Matching slow periods
    pub count: usize,
    /// Sum of per-interval rounded seconds
    pub total_duration_seconds: i64,
}

/// Counts and summed durations for a set of intervals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FaffStats {
    pub slow_count: usize,
    pub gap_count: usize,
    /// All intervals, in seconds
    pub total_duration_seconds: i64,
    /// Gap intervals only, in seconds
    pub gap_duration_seconds: i64,
    /// One entry per selected bucket, in selection order
    pub range_breakdown: Vec<RangeBreakdownEntry>,
}

impl FaffStats {
    /// Seconds spent in slow periods.
    pub fn slow_duration_seconds(&self) -> i64 {
        self.total_duration_seconds - self.gap_duration_seconds
    }

    pub fn breakdown_for(&self, bucket: DurationBucket) -> Option<&RangeBreakdownEntry> {
        self.range_breakdown.iter().find(|entry| entry.bucket == bucket)
    }
}

/// Aggregate interval counts, durations and the per-bucket breakdown.
///
/// Gaps never contribute to the breakdown. Buckets with no matches still get
/// a zeroed entry, and duplicates in `selected` are kept.
pub fn aggregate(intervals: &[Interval], selected: &[DurationBucket]) -> FaffStats {
    let slow_count = intervals.iter().filter(|i| !i.is_gap()).count();
    let gap_count = intervals.len() - slow_count;
    let total_duration_seconds = intervals.iter().map(Interval::rounded_seconds).sum();
    let gap_duration_seconds = intervals
        .iter()
        .filter(|i| i.is_gap())
        .map(Interval::rounded_seconds)
        .sum();

    let range_breakdown = selected
        .iter()
        .map(|&bucket| {
            let matching: Vec<&Interval> = intervals
                .iter()
                .filter(|i| !i.is_gap())
                .filter(|i| bucket.matches(i.duration_minutes(), i.duration_hours()))
                .collect();
            RangeBreakdownEntry {
                bucket,
                label: bucket.label().to_string(),
                count: matching.len(),
                total_duration_seconds: matching.iter().map(|i| i.rounded_seconds()).sum(),
            }
        })
        .collect();

    FaffStats {
        slow_count,
        gap_count,
        total_duration_seconds,
        gap_duration_seconds,
        range_breakdown,
    }
}
