use chrono::{Days, NaiveDate};
use datelevel::{DateLevel, DateLevelError, OverlayCommit, Series};
use proptest::prelude::*;

type Rate = DateLevel<u32, i64>;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
}

fn day(offset: i64) -> NaiveDate {
    let b = base();
    if offset >= 0 {
        b + Days::new(offset.unsigned_abs())
    } else {
        b - Days::new(offset.unsigned_abs())
    }
}

fn arb_series() -> impl Strategy<Value = Vec<Rate>> {
    proptest::collection::vec((1i64..20, 0i64..3), 0..12).prop_map(|runs| {
        let mut out = Vec::new();
        let mut start = 0;
        for (len, value) in runs {
            out.push(DateLevel::new(1, day(start), day(start + len - 1), value));
            start += len;
        }
        out
    })
}

fn arb_src() -> impl Strategy<Value = Rate> {
    (-60i64..300, 0i64..60, 0i64..3)
        .prop_map(|(start, len, value)| DateLevel::new(1, day(start), day(start + len), value))
}

fn snapshot(series: &Series<Rate>) -> Vec<(NaiveDate, NaiveDate, i64)> {
    let mut out: Vec<_> = series.iter().map(|e| (e.start, e.end, e.value)).collect();
    out.sort();
    out
}

fn build(entries: &[Rate], commit: OverlayCommit) -> Series<Rate> {
    Series::builder()
        .entries(entries.iter().cloned())
        .entry(DateLevel::open_ended(2, base(), 42))
        .commit(commit)
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn atomic_and_best_effort_agree_on_accepted_overlays(
        entries in arb_series(),
        src in arb_src(),
    ) {
        let mut atomic = build(&entries, OverlayCommit::Atomic);
        let mut best_effort = build(&entries, OverlayCommit::BestEffort);
        let before = snapshot(&atomic);

        let a = atomic.set(src.clone());
        let b = best_effort.set(src.clone());
        prop_assert_eq!(&a, &b);

        match a {
            Ok(()) => {
                prop_assert_eq!(snapshot(&atomic), snapshot(&best_effort));
            }
            Err(DateLevelError::Discontinuity { .. }) => {
                prop_assert_eq!(snapshot(&atomic), before);
                prop_assert_eq!(best_effort.len(), atomic.len() + 1);
            }
            Err(other) => {
                prop_assert!(false, "unexpected error {:?}", other);
            }
        }
        prop_assert_eq!(atomic.series_for(&2).len(), 1);
        prop_assert_eq!(best_effort.series_for(&2).len(), 1);
    }
}
