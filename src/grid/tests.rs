use super::Grid;
use crate::cell::{Cell, CellAttrs};
use crate::index::Column;

#[test]
fn new_grid_has_full_width_rows() {
    let grid = Grid::new(4, 10, true);
    assert_eq!(grid.max_rows(), 4);
    assert_eq!(grid.max_cols(), 10);
    assert_eq!(grid.row_count(), 4);
    assert_eq!(grid.row_top(), 0);
    for r in 0..4 {
        assert_eq!(grid.row_visible(r).unwrap().cols(), 10);
    }
}

#[test]
fn scroll_region_defaults_to_full_viewport() {
    let grid = Grid::new(5, 3, true);
    assert_eq!(grid.scroll_region(), (0, 4));
}

#[test]
fn save_and_restore_cursor_roundtrip() {
    let mut grid = Grid::new(5, 5, true);
    grid.move_to(2, 3);
    grid.save_cursor();
    grid.move_to(0, 0);
    assert_eq!(grid.cur().row, 0);
    grid.restore_cursor();
    assert_eq!(grid.cur().row, 2);
    assert_eq!(grid.cur().col, 3);
}

#[test]
fn cell_at_and_cell_at_mut_index_the_viewport() {
    let mut grid = Grid::new(2, 2, true);
    *grid.cell_at_mut(0, 1).unwrap() = Cell::new("x", CellAttrs::default(), false);
    assert_eq!(grid.cell_at(0, 1).unwrap().as_str(), "x");
    assert!(grid.cell_at(5, 0).is_none());
}

#[test]
fn row_max_col_reports_trailing_occupancy() {
    let mut grid = Grid::new(1, 5, true);
    assert_eq!(grid.row_max_col(0), 0);
    grid.row_visible_mut(0).unwrap()[Column(2)] = Cell::new("x", CellAttrs::default(), false);
    assert_eq!(grid.row_max_col(0), 3);
}

#[test]
fn set_window_size_grows_rows_and_preserves_content() {
    let mut grid = Grid::new(2, 2, true);
    grid.row_visible_mut(0).unwrap()[Column(0)] = Cell::new("a", CellAttrs::default(), false);
    grid.set_window_size(3, 4);
    assert_eq!(grid.max_rows(), 3);
    assert_eq!(grid.max_cols(), 4);
    assert_eq!(grid.row_top(), 0);
    assert_eq!(grid.row_visible(0).unwrap()[Column(0)].as_str(), "a");
}

#[test]
fn set_window_size_clamps_cursor() {
    let mut grid = Grid::new(5, 5, true);
    grid.move_to(4, 4);
    grid.set_window_size(2, 2);
    assert_eq!(grid.cur().row, 1);
    assert_eq!(grid.cur().col, 2);
}

#[test]
fn set_window_size_keeps_scrollback_length_in_sync_until_custom() {
    let mut grid = Grid::new(3, 3, true);
    assert_eq!(grid.scrollback_length(), 3);
    grid.set_window_size(6, 3);
    assert_eq!(grid.scrollback_length(), 6);

    grid.set_scrollback_length(50);
    grid.set_window_size(8, 3);
    assert_eq!(grid.scrollback_length(), 50);
}

#[test]
fn alternate_grid_row_top_stays_pinned_after_resize() {
    let mut grid = Grid::new(3, 3, false);
    grid.set_window_size(5, 3);
    assert_eq!(grid.row_top(), 0);
}

#[test]
fn wrap_pending_reports_deferred_wrap_column() {
    let mut grid = Grid::new(1, 3, true);
    assert!(!grid.wrap_pending());
    grid.set_print_col(3);
    assert!(grid.wrap_pending());
    assert_eq!(grid.cur().col, 3);
}
