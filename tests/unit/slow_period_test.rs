//! Unit tests for slow-period detection.

use chrono::{DateTime, Duration, TimeZone, Utc};
use ridefaff::faff::slow::find_slow_periods;
use ridefaff::faff::DurationBucket;
use ridefaff::telemetry::Sample;

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 7, 30, 0).unwrap()
}

fn at_minute(minute: i64, speed: f64) -> Sample {
    Sample::at(start() + Duration::minutes(minute)).with_speed(speed)
}

#[test]
fn test_two_minute_stop() {
    let samples = vec![
        at_minute(0, 2.0),
        at_minute(1, 0.5),
        at_minute(3, 0.5),
        at_minute(4, 2.0),
    ];
    let periods = find_slow_periods(&samples, &[DurationBucket::TwoToFiveMin], 120_000);

    assert_eq!(periods.len(), 1);
    assert_eq!(periods[0].start_time, start() + Duration::minutes(1));
    assert_eq!(periods[0].end_time, start() + Duration::minutes(3));
    assert_eq!(periods[0].duration_minutes(), 2.0);
    assert_eq!(periods[0].sample_count(), 2);
    assert!(!periods[0].is_gap());
}

#[test]
fn test_unselected_bucket_filters_period() {
    let samples = vec![at_minute(0, 0.0), at_minute(1, 0.0), at_minute(2, 0.0)];
    assert!(find_slow_periods(&samples, &[DurationBucket::FiveToTenMin], 120_000).is_empty());
    assert_eq!(
        find_slow_periods(&samples, &[DurationBucket::FiveToTenMin, DurationBucket::TwoToFiveMin], 120_000)
            .len(),
        1
    );
}

#[test]
fn test_samples_without_speed_are_slow() {
    let samples = vec![
        Sample::at(start()),
        Sample::at(start() + Duration::minutes(1)),
        Sample::at(start() + Duration::minutes(2)),
        Sample::at(start() + Duration::minutes(3)),
    ];
    let periods = find_slow_periods(&samples, &DurationBucket::ALL, 120_000);
    assert_eq!(periods.len(), 1);
    assert_eq!(periods[0].sample_count(), 4);
}

#[test]
fn test_enhanced_speed_overrides_speed() {
    let samples: Vec<Sample> = (0..4)
        .map(|m| at_minute(m, 0.1).with_enhanced_speed(6.0))
        .collect();
    assert!(find_slow_periods(&samples, &DurationBucket::ALL, 120_000).is_empty());
}

#[test]
fn test_run_splits_on_timestamp_discontinuity() {
    // 0..3 slow, then nothing until 10, then 10..13 slow
    let samples: Vec<Sample> = [0, 1, 2, 3, 10, 11, 12, 13]
        .iter()
        .map(|&m| at_minute(m, 0.2))
        .collect();
    let periods = find_slow_periods(&samples, &DurationBucket::ALL, 120_000);

    assert_eq!(periods.len(), 2);
    assert_eq!(periods[0].end_time, start() + Duration::minutes(3));
    assert_eq!(periods[1].start_time, start() + Duration::minutes(10));
    assert_eq!(periods[1].sample_count(), 4);
}

#[test]
fn test_gps_points_skip_samples_without_position() {
    let samples = vec![
        at_minute(0, 0.0).with_position(1 << 29, 1 << 29),
        at_minute(1, 0.0),
        at_minute(2, 0.0).with_position(1 << 28, 1 << 28),
        at_minute(3, 3.0),
    ];
    let periods = find_slow_periods(&samples, &DurationBucket::ALL, 120_000);
    assert_eq!(periods[0].gps_points.len(), 2);
    assert_eq!(periods[0].gps_points[1].lat, 22.5);
}

#[test]
fn test_trailing_run_is_flushed() {
    let samples = vec![at_minute(0, 5.0), at_minute(1, 0.0), at_minute(7, 0.0)];
    // 1 -> 7 is 6 minutes apart, inside a 10 minute threshold, so no split
    let periods = find_slow_periods(&samples, &[DurationBucket::FiveToTenMin], 600_000);
    assert_eq!(periods.len(), 1);
    assert_eq!(periods[0].duration_minutes(), 6.0);
}
