use chrono::NaiveDate;
use datelevel_core::{DateLevel, DateLevelEntity, MAX_END_DATE};

fn d(m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, m, day).unwrap()
}

#[test]
fn contains_and_overlaps_are_inclusive() {
    let e = DateLevel::new("k", d(1, 10), d(1, 20), 1);
    assert!(e.contains(d(1, 10)));
    assert!(e.contains(d(1, 20)));
    assert!(!e.contains(d(1, 21)));
    assert!(e.overlaps(d(1, 20), d(2, 1)));
    assert!(e.overlaps(d(1, 1), d(1, 10)));
    assert!(!e.overlaps(d(1, 21), d(2, 1)));
}

#[test]
fn open_ended_runs_to_sentinel() {
    let e = DateLevel::open_ended(3_u8, d(5, 1), "x");
    assert_eq!(e.end, MAX_END_DATE);
    assert_eq!(MAX_END_DATE, NaiveDate::from_ymd_opt(9999, 12, 31).unwrap());
}

#[test]
fn entry_serializes_with_iso_dates() {
    let e = DateLevel::new(7_u32, d(1, 1), d(1, 31), 2.5_f64);
    let json = serde_json::to_value(&e).expect("serialize entry");
    assert_eq!(json["start"], "2022-01-01");
    assert_eq!(json["end"], "2022-01-31");
    let back: DateLevel<u32, f64> = serde_json::from_value(json).expect("deserialize entry");
    assert_eq!(back, e);
}

#[test]
fn clone_keeps_key_and_value() {
    let e = DateLevel::new("k", d(1, 1), d(1, 31), vec![1, 2]);
    let mut c = e.clone_with_same_key_and_value();
    c.set_start(d(3, 1));
    assert_eq!(c.key(), "k");
    assert!(c.has_same_value(&e));
    assert_eq!(e.start(), d(1, 1));
}
