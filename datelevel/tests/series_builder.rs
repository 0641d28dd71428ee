use datelevel::{
    DateLevel, DateLevelError, MAX_END_DATE, OverlayCommit, Series, SeriesConfig, VerifyMode,
    ViolationKind,
};
use datelevel_mock::dates::{
    APR30_2022, DEC31_2021, DEC31_2022, FEB1_2022, FEB15_2022, FEB28_2022, JAN1_2022, JAN1_2023,
    JAN15_2022, JAN31_2022, MAR1_2022, MAR31_2022,
};
use datelevel_mock::{SpreadSpec, monthly_series};

#[test]
fn build_rejects_inverted_entries() {
    let err = Series::builder()
        .entry(SpreadSpec::new(7, FEB1_2022, JAN1_2022, 1))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        DateLevelError::violation(ViolationKind::InvertedBounds, "7", FEB1_2022, JAN1_2022)
    );
}

#[test]
fn normalize_on_build_merges_equal_months() {
    let months = monthly_series(1, JAN1_2022, DEC31_2022, 100);
    let jan_id = months[0].id;
    let series = Series::builder()
        .entries(months)
        .normalize_on_build(true)
        .build()
        .unwrap();
    assert_eq!(series.len(), 1);
    assert_eq!(series.entries()[0].id, jan_id);
    assert_eq!(series.entries()[0].end, MAX_END_DATE);
}

#[test]
fn builder_setters_fill_config() {
    let series: Series<SpreadSpec> = Series::builder()
        .commit(OverlayCommit::Atomic)
        .verify_after_write(VerifyMode::Lenient)
        .rebuild_after_update(false)
        .build()
        .unwrap();
    assert_eq!(
        series.config(),
        &SeriesConfig {
            commit: OverlayCommit::Atomic,
            verify_after_write: VerifyMode::Lenient,
            rebuild_after_update: false,
            normalize_on_build: false,
        }
    );
    assert!(series.is_empty());
}

#[test]
fn rebuild_counts_merged_entries() {
    let mut series = Series::builder()
        .entries(monthly_series(1, JAN1_2022, MAR31_2022, 1))
        .entries(monthly_series(2, JAN1_2022, MAR31_2022, 2))
        .build()
        .unwrap();
    assert_eq!(series.rebuild(), 4);
    assert_eq!(series.len(), 2);
    assert_eq!(series.rebuild(), 0);
}

#[test]
fn queries_span_keys() {
    let series = Series::builder()
        .entries([
            DateLevel::new("a", JAN1_2022, JAN31_2022, 1),
            DateLevel::open_ended("a", FEB1_2022, 2),
            DateLevel::open_ended("b", JAN15_2022, 3),
        ])
        .build()
        .unwrap();

    let mut on_feb: Vec<i32> = series.effective(FEB1_2022).map(|e| e.value).collect();
    on_feb.sort_unstable();
    assert_eq!(on_feb, vec![2, 3]);
    assert_eq!(series.effective(DEC31_2021).count(), 0);
    assert_eq!(series.effective_for(&"a", JAN15_2022).map(|e| e.value), Some(1));
    assert!(series.effective_for(&"b", JAN1_2022).is_none());

    assert_eq!(series.overlapping(JAN1_2022, JAN15_2022).count(), 2);
    let a: Vec<i32> = series
        .overlapping_for(&"a", JAN15_2022, FEB15_2022)
        .map(|e| e.value)
        .collect();
    assert_eq!(a, vec![1, 2]);
}

#[test]
fn trims_apply_to_every_key() {
    let mut series = Series::builder()
        .entries(monthly_series(1, JAN1_2022, DEC31_2022, 1))
        .entry(SpreadSpec::open_ended(2, JAN1_2022, 9))
        .build()
        .unwrap();
    series.trim_start(FEB15_2022);
    series.trim_end(APR30_2022);

    let one = series.series_for(&1);
    assert_eq!(one.len(), 3);
    assert_eq!((one[0].start, one[0].end), (FEB15_2022, FEB28_2022));
    assert_eq!(one[1].start, MAR1_2022);
    assert_eq!(one[2].end, APR30_2022);

    let two = series.series_for(&2);
    assert_eq!((two[0].start, two[0].end), (FEB15_2022, APR30_2022));
    assert!(series.effective(JAN1_2023).next().is_none());
    assert!(series.effective(JAN31_2022).next().is_none());
}
