use rotation_core::{RotationTable, RotationTableError};

#[test]
fn association_table_skips_missing_rooms() {
    let table = RotationTable::association_default();
    assert_eq!(table.len(), 25);
    assert_eq!(table.units().first(), Some(&101));
    assert_eq!(table.units().last(), Some(&502));
    assert_eq!(table.position_of(403), Some(20));
    assert_eq!(table.position_of(405), Some(21));
    assert_eq!(table.position_of(404), None);
    assert_eq!(table.current_chair_unit(), 201);
    assert_eq!(table.current_treasurer_unit(), 303);
}

#[test]
fn holders_may_be_the_same_unit() {
    let table = RotationTable::new(vec![5, 6, 7], 6, 6).unwrap();
    assert_eq!(table.current_chair_unit(), table.current_treasurer_unit());
}

#[test]
fn construction_rejects_missing_holders() {
    assert_eq!(
        RotationTable::new(vec![1, 2, 3], 4, 1).unwrap_err(),
        RotationTableError::ChairNotInTable(4)
    );
    assert_eq!(
        RotationTable::new(vec![1, 2, 3], 1, 9).unwrap_err(),
        RotationTableError::TreasurerNotInTable(9)
    );
}

#[test]
fn construction_rejects_empty_table() {
    assert_eq!(
        RotationTable::new(Vec::new(), 1, 1).unwrap_err(),
        RotationTableError::Empty
    );
}

#[test]
fn table_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RotationTable>();
}
