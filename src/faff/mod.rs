//! Faff detection: slow periods and recording gaps in ride telemetry.
//!
//! This module provides:
//! - Semicircle to degree conversion
//! - Duration bucket classification
//! - Gap and slow-period detection
//! - Interval merging and statistics
//! - The analysis entry points tying them together
//!
//! Nothing here performs I/O or returns errors; irregular samples are
//! handled by fallbacks.

pub mod analysis;
pub mod buckets;
pub mod coords;
pub mod gaps;
pub mod interval;
pub mod merge;
pub mod slow;
pub mod stats;

pub use analysis::{
    analyze, analyze_activity, unify, ActivityBounds, AnalysisOptions, AnalysisResult,
    DEFAULT_GAP_THRESHOLD_MS,
};
pub use buckets::{matches_id, BucketParseError, DurationBucket};
pub use coords::{route_points, to_degrees, GpsPoint};
pub use gaps::{find_gaps, Gap};
pub use interval::{Interval, IntervalKind};
pub use merge::{merge, MergePolicy, GAP_MERGE_TOLERANCE_MS, SLOW_MERGE_TOLERANCE_MS};
pub use slow::{find_slow_periods, RunState, SPEED_THRESHOLD};
pub use stats::{aggregate, FaffStats, RangeBreakdownEntry};
