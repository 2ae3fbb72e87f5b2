use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use fintrack::{fintrack_config::Config, fintrack_core::FixedClock, Tracker};
use tempfile::TempDir;

pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

/// Config pointing at a fresh temporary data directory. Keep the guard alive
/// for the duration of the test.
pub fn temp_config() -> (Config, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let config = Config {
        data_dir: Some(temp.path().to_path_buf()),
        ..Config::default()
    };
    (config, temp)
}

pub fn open_tracker(config: &Config, now: DateTime<Utc>) -> Tracker {
    let (tracker, report) =
        Tracker::open_with_clock(config.clone(), Arc::new(FixedClock(now))).expect("open tracker");
    assert!(report.is_clean(), "unexpected load warnings: {:?}", report.warnings);
    tracker
}
