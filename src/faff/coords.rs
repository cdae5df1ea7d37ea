//! Semicircle angular encoding and decimal-degree conversion.
//!
//! Telemetry devices store positions as signed 32-bit "semicircles" where
//! ±2^31 maps to ±180 degrees.

use serde::{Deserialize, Serialize};

use crate::telemetry::Sample;

/// Degrees per semicircle (180 / 2^31).
pub const DEGREES_PER_SEMICIRCLE: f64 = 180.0 / 2_147_483_648.0;

/// A position in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GpsPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build a point from a raw semicircle pair.
    ///
    /// Returns `None` unless both components are present; a missing
    /// component never becomes zero.
    pub fn from_semicircles(lat: Option<i32>, lon: Option<i32>) -> Option<Self> {
        match (lat, lon) {
            (Some(lat), Some(lon)) => Some(Self {
                lat: to_degrees(i64::from(lat)),
                lon: to_degrees(i64::from(lon)),
            }),
            _ => None,
        }
    }

    /// Position of a sample, if it carries both lat and long.
    pub fn from_sample(sample: &Sample) -> Option<Self> {
        Self::from_semicircles(sample.position_lat, sample.position_long)
    }
}

/// Convert a semicircle value to decimal degrees.
///
/// Takes `i64` so that the `2^31` endpoint is representable.
pub fn to_degrees(raw: i64) -> f64 {
    raw as f64 * DEGREES_PER_SEMICIRCLE
}

/// Convert decimal degrees back to the nearest semicircle value.
pub fn to_semicircles(degrees: f64) -> i64 {
    (degrees / DEGREES_PER_SEMICIRCLE).round() as i64
}

/// Flattened route: every sample position that has both components.
pub fn route_points(samples: &[Sample]) -> Vec<GpsPoint> {
    samples.iter().filter_map(GpsPoint::from_sample).collect()
}
