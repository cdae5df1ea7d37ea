//! Telemetry input types handed to the faff analysis.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One telemetry reading from an activity record stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Reading time
    pub timestamp: Option<DateTime<Utc>>,
    /// Speed in m/s
    pub speed: Option<f64>,
    /// High-resolution speed in m/s, preferred over `speed`
    pub enhanced_speed: Option<f64>,
    /// Cumulative distance in meters
    pub distance: Option<f64>,
    /// Latitude in semicircles
    pub position_lat: Option<i32>,
    /// Longitude in semicircles
    pub position_long: Option<i32>,
}

impl Sample {
    /// Create a sample at the given time with no other data.
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp: Some(timestamp),
            ..Default::default()
        }
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_enhanced_speed(mut self, speed: f64) -> Self {
        self.enhanced_speed = Some(speed);
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn with_position(mut self, lat: i32, long: i32) -> Self {
        self.position_lat = Some(lat);
        self.position_long = Some(long);
        self
    }

    /// Speed used for slow detection.
    ///
    /// `enhanced_speed` wins, then `speed`; a sample with neither counts as
    /// stationary.
    pub fn effective_speed(&self) -> f64 {
        self.enhanced_speed.or(self.speed).unwrap_or(0.0)
    }
}

/// Session-level totals reported by the recording device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Session start time
    pub start_time: Option<DateTime<Utc>>,
    /// Moving (timer) time in seconds
    pub total_timer_time_s: Option<f64>,
    /// Wall-clock time in seconds
    pub total_elapsed_time_s: Option<f64>,
    /// Total distance in meters
    pub total_distance_m: Option<f64>,
}

/// A decoded activity: ordered samples plus the session summary.
#[derive(Debug, Clone, Default)]
pub struct DecodedActivity {
    pub samples: Vec<Sample>,
    pub session: SessionSummary,
}

/// Errors while reading telemetry files.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The file could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The file decoded but held no record messages
    #[error("No record messages found")]
    NoRecords,

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
