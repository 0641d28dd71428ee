use chrono::NaiveDate;
use datelevel_types::{DateLevelError, OverlayCommit, SeriesConfig, VerifyMode, ViolationKind};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn series_config_roundtrip() {
    let cfg = SeriesConfig {
        commit: OverlayCommit::Atomic,
        verify_after_write: VerifyMode::Strict,
        rebuild_after_update: false,
        normalize_on_build: true,
    };

    let json = serde_json::to_string(&cfg).expect("serialize series config");
    let de: SeriesConfig = serde_json::from_str(&json).expect("deserialize series config");

    assert_eq!(de, cfg);
}

#[test]
fn series_config_defaults() {
    let cfg = SeriesConfig::default();
    assert_eq!(cfg.commit, OverlayCommit::BestEffort);
    assert_eq!(cfg.verify_after_write, VerifyMode::Off);
    assert!(cfg.rebuild_after_update);
    assert!(!cfg.normalize_on_build);
}

#[test]
fn violation_error_roundtrip() {
    let err = DateLevelError::violation(ViolationKind::Gap, "1", d(2022, 3, 2), d(2022, 3, 31));

    let json = serde_json::to_string(&err).expect("serialize error");
    let de: DateLevelError = serde_json::from_str(&json).expect("deserialize error");

    assert_eq!(de, err);
    assert!(!de.is_argument_error());
}

#[test]
fn invalid_range_is_an_argument_error() {
    let err = DateLevelError::invalid_range(d(2022, 3, 1), d(2022, 2, 1));
    assert!(err.is_argument_error());
    assert!(err.to_string().contains("2022-03-01"));
}
