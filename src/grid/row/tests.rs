use super::Row;
use crate::cell::{Cell, CellAttrs};
use crate::index::Column;

#[test]
fn new_row_is_all_empty_and_not_wrapped() {
    let row = Row::new(5);
    assert_eq!(row.cols(), 5);
    assert!(!row.wrapped);
    assert_eq!(row.max_col(), 0);
}

#[test]
fn resize_preserves_overlap() {
    let mut row = Row::new(3);
    row[Column(1)] = Cell::new("x", CellAttrs::default(), false);
    row.resize_cols(5);
    assert_eq!(row.cols(), 5);
    assert_eq!(row[Column(1)].as_str(), "x");
    assert!(row[Column(4)].is_empty());

    row.resize_cols(2);
    assert_eq!(row.cols(), 2);
    assert_eq!(row[Column(1)].as_str(), "x");
}

#[test]
fn max_col_tracks_highest_occupied_column() {
    let mut row = Row::new(4);
    assert_eq!(row.max_col(), 0);

    row[Column(2)] = Cell::new("x", CellAttrs::default(), false);
    assert_eq!(row.max_col(), 3);

    row[Column(3)] = Cell::new("y", CellAttrs::default(), false);
    assert_eq!(row.max_col(), 4);
}

#[test]
fn index_and_index_mut_roundtrip() {
    let mut row = Row::new(2);
    row[Column(0)] = Cell::new("a", CellAttrs::default(), false);
    assert_eq!(row[Column(0)].as_str(), "a");
}
