//! Clear/kill/insert/delete/erase operations on cell content.
//!
//! Clear and kill reset cells to a blank default (content *and*
//! attributes); `erase_characters` only blanks content and leaves
//! attributes untouched — the one operation in this set that's distinct
//! from both delete (which shifts) and kill (which resets attrs too).

use super::Grid;
use crate::cell::Cell;

/// Which part of the display/line an erase operation covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseMode {
    /// From the cursor to the end (forward).
    Below,
    /// From the start up to and including the cursor (backward).
    Above,
    /// The entire display/line.
    All,
}

impl Grid {
    fn clear_row_range(&mut self, row: usize, start_col: usize, end_col: usize) {
        let cols = self.max_cols;
        if let Some(r) = self.row_visible_mut(row) {
            let end = end_col.min(cols);
            for cell in &mut r.cells_mut()[start_col.min(end)..end] {
                *cell = Cell::default();
            }
        }
    }

    /// Erase the display per `mode`, clearing `wrapped` on every touched
    /// row.
    pub fn erase_display(&mut self, mode: EraseMode) {
        self.flush_pending_scroll();
        let (from, to) = match mode {
            EraseMode::Below => (self.cur.row, self.max_rows - 1),
            EraseMode::Above => (0, self.cur.row),
            EraseMode::All => (0, self.max_rows - 1),
        };

        for row in from..=to {
            let start = if mode == EraseMode::Below && row == self.cur.row {
                self.cur.col
            } else {
                0
            };
            let end = if mode == EraseMode::Above && row == self.cur.row {
                self.cur.col + 1
            } else {
                self.max_cols
            };
            self.clear_row_range(row, start, end);
            if let Some(r) = self.row_visible_mut(row) {
                r.wrapped = false;
            }
        }
    }

    /// Erase the current line per `mode`; backward also clears the wrap
    /// flag on the previous row (the continuation link is broken).
    pub fn erase_line(&mut self, mode: EraseMode) {
        self.flush_pending_scroll();
        let row = self.cur.row;
        let (start, end) = match mode {
            EraseMode::Below => (self.cur.col, self.max_cols),
            EraseMode::Above => (0, self.cur.col + 1),
            EraseMode::All => (0, self.max_cols),
        };
        self.clear_row_range(row, start, end);
        if let Some(r) = self.row_visible_mut(row) {
            r.wrapped = false;
        }
        if mode == EraseMode::Above && row > 0 {
            if let Some(prev) = self.row_visible_mut(row - 1) {
                prev.wrapped = false;
            }
        }
    }

    /// Shift the current row's content right by `n` cells starting at
    /// the cursor, discarding what falls off the right edge. Saturating
    /// (`n` ≥ remaining width) falls through to clearing to end of line.
    /// Clears `wrapped`.
    pub fn insert_characters(&mut self, n: usize) {
        self.flush_pending_scroll();
        let row = self.cur.row;
        let col = self.cur.col;
        let cols = self.max_cols;
        if n >= cols.saturating_sub(col) {
            self.erase_line(EraseMode::Below);
            return;
        }

        if let Some(r) = self.row_visible_mut(row) {
            let cells = r.cells_mut();
            cells[col..].rotate_right(n);
            for cell in &mut cells[col..col + n] {
                *cell = Cell::default();
            }
            r.wrapped = false;
        }
    }

    /// Shift the current row's content left by `n` cells starting at the
    /// cursor, filling the vacated right edge with blanks. Saturating
    /// falls through to clearing to end of line. Clears `wrapped`.
    pub fn delete_characters(&mut self, n: usize) {
        self.flush_pending_scroll();
        let row = self.cur.row;
        let col = self.cur.col;
        let cols = self.max_cols;
        if n >= cols.saturating_sub(col) {
            self.erase_line(EraseMode::Below);
            return;
        }

        if let Some(r) = self.row_visible_mut(row) {
            let cells = r.cells_mut();
            cells[col..].rotate_left(n);
            let tail_start = cols - n;
            for cell in &mut cells[tail_start..] {
                *cell = Cell::default();
            }
            r.wrapped = false;
        }
    }

    /// Blank `n` cells starting at the cursor without shifting content
    /// and without touching attributes — distinct from both delete and
    /// kill.
    pub fn erase_characters(&mut self, n: usize) {
        self.flush_pending_scroll();
        let row = self.cur.row;
        let col = self.cur.col;
        let end = (col + n).min(self.max_cols);
        if let Some(r) = self.row_visible_mut(row) {
            for cell in &mut r.cells_mut()[col..end] {
                cell.clear_content();
            }
        }
    }
}
