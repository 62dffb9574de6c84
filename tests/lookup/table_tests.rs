use lut1d::lookup::config::MAX_TABLE_SIZE;
use lut1d::lookup::errors::TableError;
use lut1d::lookup::table::{check_table_state, validate_table, SetOutcome, TableState, TableStore};

type LutResult = Result<(), TableError>;

#[test]
fn valid_table() -> LutResult {
    validate_table(&[0.0, 1.0, 2.0], &[5.0, -1.0, 3.0])?;
    assert_eq!(check_table_state(&[0.0, 1.0], &[0.0, 0.0]), TableState::Valid);
    Ok(())
}

#[test]
fn empty_either_side() {
    assert_eq!(check_table_state(&[], &[1.0, 2.0]), TableState::Empty);
    assert_eq!(check_table_state(&[1.0, 2.0], &[]), TableState::Empty);
    assert_eq!(validate_table(&[], &[]).unwrap_err(), TableError::Empty);
}

#[test]
fn single_sample_is_size_invalid_even_when_lengths_match() {
    let err = validate_table(&[1.0], &[1.0]).unwrap_err();
    assert!(matches!(err, TableError::SizeInvalid { got: 1, min: 2, .. }));
    assert_eq!(err.state(), TableState::SizeInvalid);
}

#[test]
fn size_checked_before_length_match() {
    // one x sample and two y samples: size bound wins over mismatch
    assert_eq!(check_table_state(&[1.0], &[1.0, 2.0]), TableState::SizeInvalid);
}

#[test]
fn oversized_table() {
    let x: Vec<f64> = (0..=MAX_TABLE_SIZE).map(|i| i as f64).collect();
    let y = x.clone();
    let err = validate_table(&x, &y).unwrap_err();
    assert!(matches!(err, TableError::SizeInvalid { got, .. } if got == MAX_TABLE_SIZE + 1));
}

#[test]
fn size_mismatch() {
    let err = validate_table(&[1.0, 2.0], &[1.0]).unwrap_err();
    assert!(matches!(err, TableError::SizeMismatch { x_len: 2, y_len: 1 }));
    assert_eq!(err.state(), TableState::SizeMismatch);
}

#[test]
fn not_increasing_regardless_of_y() {
    let x = [0.0, 2.0, 1.0, 3.0];
    for y in [[0.0, 1.0, 2.0, 3.0], [3.0, 2.0, 1.0, 0.0], [7.0; 4]] {
        let err = validate_table(&x, &y).unwrap_err();
        assert!(matches!(err, TableError::NotIncreasing { idx: 2, prev, next }
            if prev == 2.0 && next == 1.0));
    }
}

#[test]
fn duplicate_and_nan_x_rejected() {
    assert_eq!(check_table_state(&[0.0, 1.0, 1.0], &[0.0; 3]), TableState::NotIncreasing);
    assert_eq!(check_table_state(&[0.0, f64::NAN, 2.0], &[0.0; 3]), TableState::NotIncreasing);
}

#[test]
fn store_starts_empty() {
    let store = TableStore::new();
    assert!(store.is_empty());
    assert!(!store.is_valid());
    assert_eq!(store.size(), 0);
    assert_eq!(store.state(), TableState::Empty);
    assert_eq!(store.boundary_y(), None);
}

#[test]
fn store_set_success() {
    let mut store = TableStore::new();
    assert_eq!(store.set(&[0.0, 1.0, 2.0], &[1.0, 2.0, 4.0]), SetOutcome::Success);
    assert!(store.is_valid());
    assert!(!store.is_empty());
    assert_eq!(store.size(), 3);
    assert_eq!(store.x(), &[0.0, 1.0, 2.0]);
    assert_eq!(store.y(), &[1.0, 2.0, 4.0]);
    assert_eq!(store.boundary_y(), Some((1.0, 4.0)));
}

#[test]
fn rejected_table_leaves_valid_table_untouched() {
    let mut store = TableStore::new();
    store.set(&[0.0, 1.0], &[10.0, 20.0]);

    assert_eq!(store.set(&[1.0, 2.0], &[1.0]), SetOutcome::Remain);
    assert_eq!(store.set(&[0.0, 2.0, 1.0], &[0.0; 3]), SetOutcome::Remain);
    assert!(store.is_valid());
    assert_eq!(store.x(), &[0.0, 1.0]);
    assert_eq!(store.y(), &[10.0, 20.0]);
}

#[test]
fn rejected_table_on_empty_store_fails() {
    let mut store = TableStore::new();
    assert_eq!(store.set(&[1.0, 2.0], &[1.0]), SetOutcome::Fail);
    assert!(store.is_empty());
    assert!(!store.is_valid());
}

#[test]
fn try_set_reports_reason() {
    let mut store = TableStore::new();
    let err = store.try_set(&[0.0, 0.0], &[1.0, 2.0]).unwrap_err();
    assert_eq!(err.state(), TableState::NotIncreasing);
}

#[test]
fn clear_resets_flags() {
    let mut store = TableStore::new();
    store.set(&[0.0, 1.0], &[0.0, 1.0]);
    assert!(store.clear());
    assert!(store.is_empty());
    assert!(!store.is_valid());
    assert_eq!(store.size(), 0);
    assert!(store.x().is_empty());
    assert!(store.y().is_empty());
}

#[test]
fn infinite_x_rejected() {
    let err = validate_table(&[f64::NEG_INFINITY, 0.0, f64::INFINITY], &[1.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(err, TableError::NonFiniteX { idx: 0, got } if got == f64::NEG_INFINITY));
    assert_eq!(err.state(), TableState::NotIncreasing);

    let err = validate_table(&[0.0, 1.0, f64::INFINITY], &[1.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(err, TableError::NonFiniteX { idx: 2, .. }));
}

#[test]
fn infinite_x_leaves_stored_table() {
    let mut store = TableStore::new();
    store.set(&[0.0, 1.0], &[10.0, 20.0]);
    assert_eq!(store.set(&[0.0, f64::INFINITY], &[1.0, 2.0]), SetOutcome::Remain);
    assert_eq!(store.x(), &[0.0, 1.0]);
}
