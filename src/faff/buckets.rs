//! Duration buckets for classifying faff intervals.
//!
//! Each bucket is a half-open range `[lower, upper)` tested against exactly
//! one unit: minutes for the sub-hour buckets, hours for the rest.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Named duration range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DurationBucket {
    /// 2-5 minutes
    #[serde(rename = "2to5")]
    TwoToFiveMin,
    /// 5-10 minutes
    #[serde(rename = "5to10")]
    FiveToTenMin,
    /// 10-30 minutes
    #[serde(rename = "10to30")]
    TenToThirtyMin,
    /// 30-60 minutes
    #[serde(rename = "30to60")]
    ThirtyToSixtyMin,
    /// 1-2 hours
    #[serde(rename = "1to2h")]
    OneToTwoHours,
    /// 2 hours and longer
    #[serde(rename = "2hplus")]
    OverTwoHours,
}

/// Unit a bucket's bounds are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketUnit {
    Minutes,
    Hours,
}

impl DurationBucket {
    /// All buckets, shortest first.
    pub const ALL: [DurationBucket; 6] = [
        DurationBucket::TwoToFiveMin,
        DurationBucket::FiveToTenMin,
        DurationBucket::TenToThirtyMin,
        DurationBucket::ThirtyToSixtyMin,
        DurationBucket::OneToTwoHours,
        DurationBucket::OverTwoHours,
    ];

    /// Stable identifier used in config files and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            DurationBucket::TwoToFiveMin => "2to5",
            DurationBucket::FiveToTenMin => "5to10",
            DurationBucket::TenToThirtyMin => "10to30",
            DurationBucket::ThirtyToSixtyMin => "30to60",
            DurationBucket::OneToTwoHours => "1to2h",
            DurationBucket::OverTwoHours => "2hplus",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DurationBucket::TwoToFiveMin => "2-5 min",
            DurationBucket::FiveToTenMin => "5-10 min",
            DurationBucket::TenToThirtyMin => "10-30 min",
            DurationBucket::ThirtyToSixtyMin => "30-60 min",
            DurationBucket::OneToTwoHours => "1-2 hours",
            DurationBucket::OverTwoHours => "2+ hours",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bucket| bucket.id() == id)
    }

    /// Unit and bounds: `(unit, lower inclusive, upper exclusive)`.
    pub fn range(&self) -> (BucketUnit, f64, Option<f64>) {
        match self {
            DurationBucket::TwoToFiveMin => (BucketUnit::Minutes, 2.0, Some(5.0)),
            DurationBucket::FiveToTenMin => (BucketUnit::Minutes, 5.0, Some(10.0)),
            DurationBucket::TenToThirtyMin => (BucketUnit::Minutes, 10.0, Some(30.0)),
            DurationBucket::ThirtyToSixtyMin => (BucketUnit::Minutes, 30.0, Some(60.0)),
            DurationBucket::OneToTwoHours => (BucketUnit::Hours, 1.0, Some(2.0)),
            DurationBucket::OverTwoHours => (BucketUnit::Hours, 2.0, None),
        }
    }

    /// Whether a duration falls in this bucket.
    pub fn matches(&self, duration_minutes: f64, duration_hours: f64) -> bool {
        let (unit, lower, upper) = self.range();
        let value = match unit {
            BucketUnit::Minutes => duration_minutes,
            BucketUnit::Hours => duration_hours,
        };
        value >= lower && upper.map_or(true, |upper| value < upper)
    }

    /// Convenience for a millisecond duration using unrounded minutes.
    pub fn matches_ms(&self, duration_ms: i64) -> bool {
        let minutes = duration_ms as f64 / 60_000.0;
        self.matches(minutes, minutes / 60.0)
    }
}

impl std::fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Unknown bucket identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown duration bucket: {0}")]
pub struct BucketParseError(pub String);

impl FromStr for DurationBucket {
    type Err = BucketParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s.trim()).ok_or_else(|| BucketParseError(s.to_string()))
    }
}

/// Classify by raw identifier. Unknown identifiers never match.
pub fn matches_id(id: &str, duration_minutes: f64, duration_hours: f64) -> bool {
    DurationBucket::from_id(id).map_or(false, |bucket| bucket.matches(duration_minutes, duration_hours))
}

/// First bucket (of all six) containing the duration, if any.
pub fn classify(duration_minutes: f64, duration_hours: f64) -> Option<DurationBucket> {
    DurationBucket::ALL
        .into_iter()
        .find(|bucket| bucket.matches(duration_minutes, duration_hours))
}
