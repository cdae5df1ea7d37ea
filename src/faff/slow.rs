//! Slow-period detection.
//!
//! Consecutive samples below [`SPEED_THRESHOLD`] form a run. A run closes on
//! the first sample at or above the threshold, or splits when the time since
//! its last sample exceeds the gap threshold. Closed runs become slow
//! periods when their duration lands in one of the selected buckets.

use super::buckets::DurationBucket;
use super::coords::GpsPoint;
use super::interval::Interval;
use crate::telemetry::Sample;
use std::ops::Range;

/// Speed below which a sample counts as slow, m/s.
pub const SPEED_THRESHOLD: f64 = 0.75;

/// Whether a sample counts as slow.
pub fn is_slow(sample: &Sample) -> bool {
    sample.effective_speed() < SPEED_THRESHOLD
}

/// Run accumulator over sample indices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RunState {
    /// No open run
    #[default]
    Idle,
    /// Open run covering `samples[range]`
    Accumulating(Range<usize>),
}

impl RunState {
    /// Feed the slow sample at `index`.
    ///
    /// Returns the next state and, when the run was split on a timestamp
    /// discontinuity, the run that was closed.
    pub fn on_slow(
        self,
        samples: &[Sample],
        index: usize,
        gap_threshold_ms: i64,
    ) -> (RunState, Option<Range<usize>>) {
        match self {
            RunState::Idle => (RunState::Accumulating(index..index + 1), None),
            RunState::Accumulating(run) => {
                let last = run.end.checked_sub(1).and_then(|i| samples.get(i));
                let split = match (last.and_then(|s| s.timestamp), samples[index].timestamp) {
                    (Some(prev), Some(next)) => {
                        (next - prev).num_milliseconds() > gap_threshold_ms
                    }
                    _ => false,
                };
                if split {
                    (RunState::Accumulating(index..index + 1), Some(run))
                } else {
                    (RunState::Accumulating(run.start..index + 1), None)
                }
            }
        }
    }

    /// Feed a fast sample: any open run closes.
    pub fn on_fast(self) -> (RunState, Option<Range<usize>>) {
        (RunState::Idle, self.finish())
    }

    /// Close the open run, if any.
    pub fn finish(self) -> Option<Range<usize>> {
        match self {
            RunState::Idle => None,
            RunState::Accumulating(run) => Some(run),
        }
    }
}

/// Turn a closed run into a slow period if it matches a selected bucket.
///
/// Runs whose first or last sample has no timestamp are dropped.
pub fn close_run(run: &[Sample], selected: &[DurationBucket]) -> Option<Interval> {
    let (first, last) = (run.first()?, run.last()?);
    let (Some(start_time), Some(end_time)) = (first.timestamp, last.timestamp) else {
        tracing::debug!("Dropping slow run of {} samples without boundary timestamps", run.len());
        return None;
    };

    let duration_ms = (end_time - start_time).num_milliseconds();
    if !selected.iter().any(|bucket| bucket.matches_ms(duration_ms)) {
        return None;
    }

    let start_distance = first.distance.unwrap_or(0.0);
    let end_distance = last.distance.unwrap_or(start_distance);
    let gps_points: Vec<GpsPoint> = run.iter().filter_map(GpsPoint::from_sample).collect();

    Some(Interval::slow(
        start_time,
        end_time,
        run.len(),
        start_distance,
        end_distance,
        gps_points,
    ))
}

/// Find slow periods matching any of the selected buckets.
pub fn find_slow_periods(
    samples: &[Sample],
    selected: &[DurationBucket],
    gap_threshold_ms: i64,
) -> Vec<Interval> {
    if selected.is_empty() {
        return Vec::new();
    }

    let mut periods = Vec::new();
    let mut state = RunState::Idle;

    for (index, sample) in samples.iter().enumerate() {
        let (next, closed) = if is_slow(sample) {
            state.on_slow(samples, index, gap_threshold_ms)
        } else {
            state.on_fast()
        };
        state = next;
        if let Some(run) = closed {
            periods.extend(close_run(&samples[run], selected));
        }
    }
    if let Some(run) = state.finish() {
        periods.extend(close_run(&samples[run], selected));
    }

    tracing::debug!("Found {} slow periods in {} samples", periods.len(), samples.len());
    periods
}
