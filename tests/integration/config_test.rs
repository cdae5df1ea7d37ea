//! Integration tests for configuration persistence.

use ridefaff::faff::{DurationBucket, MergePolicy};
use ridefaff::storage::config::{load_config_from, save_config_to, AnalysisConfig};
use tempfile::TempDir;

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = AnalysisConfig {
        gap_threshold_ms: 300_000,
        selected_buckets: vec![DurationBucket::OverTwoHours, DurationBucket::TwoToFiveMin],
        merge_policy: MergePolicy::Raw,
        ..Default::default()
    };
    save_config_to(&config, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded, config);

    let options = loaded.to_options();
    assert_eq!(options.gap_threshold_ms, 300_000);
    assert_eq!(options.merge_policy, MergePolicy::Raw);
    assert_eq!(options.selected_buckets[0], DurationBucket::OverTwoHours);
}

#[test]
fn test_unknown_bucket_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "selected_buckets = [\"3to7\"]\n").unwrap();
    assert!(load_config_from(&path).is_err());
}
