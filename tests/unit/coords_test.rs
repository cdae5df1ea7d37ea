//! Unit tests for semicircle conversion and route flattening.

use chrono::{TimeZone, Utc};
use ridefaff::faff::coords::{route_points, to_degrees, to_semicircles, GpsPoint};
use ridefaff::telemetry::Sample;

#[test]
fn test_half_circle_endpoints() {
    assert_eq!(to_degrees(2_147_483_648), 180.0);
    assert_eq!(to_degrees(-2_147_483_648), -180.0);
}

#[test]
fn test_known_location() {
    // Greenwich observatory, roughly
    let lat = to_semicircles(51.4769);
    let lon = to_semicircles(-0.0005);
    let point = GpsPoint::from_semicircles(Some(lat as i32), Some(lon as i32)).unwrap();
    assert!((point.lat - 51.4769).abs() < 1e-6);
    assert!((point.lon + 0.0005).abs() < 1e-6);
}

#[test]
fn test_route_skips_samples_without_both_components() {
    let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    let mut half = Sample::at(t0);
    half.position_lat = Some(1 << 29);
    let samples = vec![
        Sample::at(t0).with_position(1 << 29, 1 << 29),
        half,
        Sample::at(t0),
        Sample::at(t0).with_position(-(1 << 29), 0),
    ];

    let route = route_points(&samples);
    assert_eq!(route, vec![GpsPoint::new(45.0, 45.0), GpsPoint::new(-45.0, 0.0)]);
}
