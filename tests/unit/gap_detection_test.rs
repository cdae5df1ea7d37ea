//! Unit tests for recording gap detection.

use chrono::{DateTime, Duration, TimeZone, Utc};
use ridefaff::faff::gaps::find_gaps;
use ridefaff::faff::GpsPoint;
use ridefaff::telemetry::Sample;

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 7, 30, 0).unwrap()
}

/// One sample per second for `count` seconds starting at `offset_secs`.
fn steady_block(offset_secs: i64, count: i64, distance_start: f64) -> Vec<Sample> {
    (0..count)
        .map(|i| {
            Sample::at(start() + Duration::seconds(offset_secs + i))
                .with_speed(8.0)
                .with_distance(distance_start + i as f64 * 8.0)
        })
        .collect()
}

#[test]
fn test_two_samples_ten_minutes_apart() {
    let samples = vec![
        Sample::at(start()),
        Sample::at(start() + Duration::minutes(10)),
    ];
    let gaps = find_gaps(&samples, 300_000);
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].duration_minutes, 10);
}

#[test]
fn test_continuous_recording_has_no_gaps() {
    let samples = steady_block(0, 600, 0.0);
    assert!(find_gaps(&samples, 120_000).is_empty());
}

#[test]
fn test_gaps_are_reported_in_order() {
    let mut samples = steady_block(0, 60, 0.0);
    samples.extend(steady_block(600, 60, 480.0));
    samples.extend(steady_block(4000, 60, 960.0));

    let gaps = find_gaps(&samples, 120_000);
    assert_eq!(gaps.len(), 2);
    assert!(gaps[0].start_time < gaps[1].start_time);
    assert_eq!(gaps[0].start_time, start() + Duration::seconds(59));
    assert_eq!(gaps[0].end_time, start() + Duration::seconds(600));
    assert_eq!(gaps[0].start_distance, 59.0 * 8.0);
    assert_eq!(gaps[0].end_distance, 480.0);
    // 3341s is 55.68 minutes, rounded to 56
    assert_eq!(gaps[1].duration_minutes, 56);
    assert_eq!(gaps[1].duration_hours, 56.0 / 60.0);
}

#[test]
fn test_gap_positions_are_converted() {
    let samples = vec![
        Sample::at(start()).with_position(1 << 30, 0),
        Sample::at(start() + Duration::minutes(5)).with_position(0, -(1 << 30)),
    ];
    let gap = &find_gaps(&samples, 120_000)[0];
    assert_eq!(gap.start_gps_point, Some(GpsPoint::new(90.0, 0.0)));
    assert_eq!(gap.end_gps_point, Some(GpsPoint::new(0.0, -90.0)));
}
