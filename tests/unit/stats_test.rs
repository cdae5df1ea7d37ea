//! Unit tests for faff statistics.

use chrono::{DateTime, Duration, TimeZone, Utc};
use ridefaff::faff::stats::aggregate;
use ridefaff::faff::{DurationBucket, Gap, Interval};

fn t(secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 7, 30, 0).unwrap() + Duration::seconds(secs)
}

#[test]
fn test_hour_scale_breakdown() {
    let intervals = vec![
        Interval::slow(t(0), t(3900), 3900, 0.0, 10.0, Vec::new()),
        Interval::slow(t(5000), t(5000 + 9000), 9000, 10.0, 20.0, Vec::new()),
    ];
    let stats = aggregate(
        &intervals,
        &[DurationBucket::OneToTwoHours, DurationBucket::OverTwoHours, DurationBucket::ThirtyToSixtyMin],
    );

    assert_eq!(stats.range_breakdown[0].count, 1);
    assert_eq!(stats.range_breakdown[0].total_duration_seconds, 3900);
    assert_eq!(stats.range_breakdown[1].count, 1);
    assert_eq!(stats.range_breakdown[1].total_duration_seconds, 9000);
    assert_eq!(stats.range_breakdown[2].count, 0);
    assert_eq!(stats.range_breakdown[2].label, "30-60 min");
}

#[test]
fn test_sub_second_durations_round_per_interval() {
    let intervals = vec![
        Interval::slow(t(0), t(150) + Duration::milliseconds(400), 2, 0.0, 0.0, Vec::new()),
        Interval::slow(t(500), t(650) + Duration::milliseconds(400), 2, 0.0, 0.0, Vec::new()),
    ];
    let stats = aggregate(&intervals, &[DurationBucket::TwoToFiveMin]);
    // 150.4s rounds to 150 each time; summing first would give 301
    assert_eq!(stats.total_duration_seconds, 300);
    assert_eq!(stats.range_breakdown[0].total_duration_seconds, 300);
}

#[test]
fn test_gap_only_list() {
    let gap = Interval::from_gap(Gap::between(t(0), t(600), 0.0, 0.0, None, None));
    let stats = aggregate(&[gap], &[DurationBucket::FiveToTenMin]);
    assert_eq!(stats.gap_count, 1);
    assert_eq!(stats.slow_count, 0);
    assert_eq!(stats.gap_duration_seconds, 600);
    assert_eq!(stats.range_breakdown[0].count, 0);
}
