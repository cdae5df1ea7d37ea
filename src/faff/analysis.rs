//! Faff analysis entry points.
//!
//! [`analyze`] produces the sorted interval list; [`analyze_activity`] adds
//! statistics, activity bounds and the full route for display.

use super::buckets::DurationBucket;
use super::coords::{route_points, GpsPoint};
use super::gaps::find_gaps;
use super::interval::Interval;
use super::merge::{merge, MergePolicy, GAP_MERGE_TOLERANCE_MS, SLOW_MERGE_TOLERANCE_MS};
use super::slow::find_slow_periods;
use super::stats::{aggregate, FaffStats};
use crate::telemetry::{Sample, SessionSummary};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Default gap threshold, ms.
pub const DEFAULT_GAP_THRESHOLD_MS: i64 = 120_000;

/// Parameters for one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    /// Buckets to report, in display order
    pub selected_buckets: Vec<DurationBucket>,
    /// Minimum silence counted as a recording gap, ms
    pub gap_threshold_ms: i64,
    pub merge_policy: MergePolicy,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            selected_buckets: DurationBucket::ALL.to_vec(),
            gap_threshold_ms: DEFAULT_GAP_THRESHOLD_MS,
            merge_policy: MergePolicy::default(),
        }
    }
}

impl AnalysisOptions {
    pub fn new(selected_buckets: Vec<DurationBucket>, gap_threshold_ms: i64) -> Self {
        Self {
            selected_buckets,
            gap_threshold_ms,
            ..Default::default()
        }
    }

    pub fn with_merge_policy(mut self, merge_policy: MergePolicy) -> Self {
        self.merge_policy = merge_policy;
        self
    }
}

/// Start, end, moving time and distance of the whole activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActivityBounds {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    /// Wall-clock seconds
    pub elapsed_seconds: Option<f64>,
    /// Timer (moving) seconds
    pub moving_seconds: Option<f64>,
    /// Meters
    pub distance: Option<f64>,
}

impl ActivityBounds {
    /// Derive bounds from the session totals, falling back to the samples.
    pub fn extract(session: &SessionSummary, samples: &[Sample]) -> Self {
        let first_time = samples.iter().find_map(|s| s.timestamp);
        let last_time = samples.iter().rev().find_map(|s| s.timestamp);

        let start_time = session.start_time.or(first_time);
        let end_time = match (start_time, session.total_elapsed_time_s) {
            (Some(start), Some(elapsed)) => {
                Some(start + Duration::milliseconds((elapsed * 1000.0).round() as i64))
            }
            _ => last_time,
        };
        let elapsed_seconds = session.total_elapsed_time_s.or_else(|| match (start_time, end_time) {
            (Some(start), Some(end)) => Some((end - start).num_milliseconds() as f64 / 1000.0),
            _ => None,
        });
        let distance = session
            .total_distance_m
            .or_else(|| samples.iter().rev().find_map(|s| s.distance));

        Self {
            start_time,
            end_time,
            elapsed_seconds,
            moving_seconds: session.total_timer_time_s,
            distance,
        }
    }
}

/// Everything the display layer needs for one activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Slow periods and gaps, sorted by start time
    pub intervals: Vec<Interval>,
    #[serde(flatten)]
    pub stats: FaffStats,
    pub bounds: ActivityBounds,
    /// Share of elapsed time spent in intervals
    pub faff_fraction: Option<f64>,
    /// Every recorded position
    pub route: Vec<GpsPoint>,
}

/// Detect slow periods and gaps and return them in start-time order.
///
/// Returns nothing when no bucket is selected.
pub fn analyze(samples: &[Sample], options: &AnalysisOptions) -> Vec<Interval> {
    if options.selected_buckets.is_empty() {
        return Vec::new();
    }

    let slow = find_slow_periods(samples, &options.selected_buckets, options.gap_threshold_ms);
    let gaps: Vec<Interval> = find_gaps(samples, options.gap_threshold_ms)
        .into_iter()
        .map(Interval::from_gap)
        .collect();

    unify(slow, gaps, &options.selected_buckets, options.merge_policy)
}

/// Combine detector output into one list sorted by start time.
///
/// Slow periods go first so that a tie on start time keeps them ahead of
/// gaps. A merged slow period must still land in a selected bucket.
pub fn unify(
    slow: Vec<Interval>,
    gaps: Vec<Interval>,
    selected: &[DurationBucket],
    merge_policy: MergePolicy,
) -> Vec<Interval> {
    let (slow, gaps) = match merge_policy {
        MergePolicy::MergeBeforeSort => {
            let slow: Vec<Interval> = merge(slow, SLOW_MERGE_TOLERANCE_MS)
                .into_iter()
                .filter(|period| {
                    selected
                        .iter()
                        .any(|bucket| bucket.matches_ms(period.duration_ms()))
                })
                .collect();
            (slow, merge(gaps, GAP_MERGE_TOLERANCE_MS))
        }
        MergePolicy::Raw => (slow, gaps),
    };

    let mut intervals = slow;
    intervals.extend(gaps);
    intervals.sort_by_key(|interval| interval.start_time);
    intervals
}

/// Full analysis: intervals, statistics, bounds and route.
pub fn analyze_activity(
    samples: &[Sample],
    session: &SessionSummary,
    options: &AnalysisOptions,
) -> AnalysisResult {
    let intervals = analyze(samples, options);
    let stats = aggregate(&intervals, &options.selected_buckets);
    let bounds = ActivityBounds::extract(session, samples);

    let faff_fraction = bounds
        .elapsed_seconds
        .filter(|elapsed| *elapsed > 0.0)
        .map(|elapsed| stats.total_duration_seconds as f64 / elapsed);

    tracing::info!(
        "Analysed {} samples: {} slow periods, {} gaps, {}s total",
        samples.len(),
        stats.slow_count,
        stats.gap_count,
        stats.total_duration_seconds
    );

    AnalysisResult {
        intervals,
        stats,
        bounds,
        faff_fraction,
        route: route_points(samples),
    }
}
