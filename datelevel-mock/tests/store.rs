use datelevel_core::{DateLevelEntity, MAX_END_DATE};
use datelevel_mock::dates::{FEB1_2022, FEB28_2022, JAN1_2022, JAN31_2022, MAR1_2022, MAR31_2022};
use datelevel_mock::{MockStore, SpreadSpec};

#[test]
fn rebuild_deletes_merged_rows_by_id() {
    let jan = SpreadSpec::new(1, JAN1_2022, JAN31_2022, 100);
    let feb = SpreadSpec::new(1, FEB1_2022, FEB28_2022, 100);
    let mar = SpreadSpec::new(1, MAR1_2022, MAR31_2022, 200);
    let (jan_id, feb_id, mar_id) = (jan.id, feb.id, mar.id);

    let mut store = MockStore::with_rows([feb, mar, jan]);
    assert_eq!(store.rebuild(), 1);

    assert!(store.was_deleted(feb_id));
    assert_eq!(store.deleted_ids().collect::<Vec<_>>(), vec![feb_id]);
    let rows = store.rows_for(&1);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, jan_id);
    assert_eq!((rows[0].start(), rows[0].end()), (JAN1_2022, FEB28_2022));
    assert_eq!(rows[1].id, mar_id);
    assert_eq!(rows[1].end(), MAX_END_DATE);
}

#[test]
fn rebuild_keeps_keys_apart() {
    let mut store = MockStore::new();
    store.insert(SpreadSpec::new(1, JAN1_2022, JAN31_2022, 5));
    store.insert(SpreadSpec::new(2, FEB1_2022, FEB28_2022, 5));
    assert_eq!(store.rebuild(), 0);
    assert_eq!(store.rows().len(), 2);
    assert_eq!(store.rebuild_count(), 1);
    assert!(store.rows().iter().all(|r| r.end() == MAX_END_DATE));
}

#[test]
fn canonical_rows_are_left_alone() {
    let mut store = MockStore::with_rows([
        SpreadSpec::new(1, JAN1_2022, JAN31_2022, 1),
        SpreadSpec::open_ended(1, FEB1_2022, 2),
    ]);
    assert_eq!(store.rebuild(), 0);
    assert_eq!(store.rebuild(), 0);
    assert_eq!(store.deleted_ids().count(), 0);
    assert_eq!(store.rebuild_count(), 2);
}
