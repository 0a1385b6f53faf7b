//! Terminal grid: a single ring of rows spanning scrollback and viewport.
//!
//! Rows `[0, row_top)` are scrollback history; rows `[row_top, row_top +
//! max_rows)` are the live viewport. `row_top` slides as the primary grid
//! grows into its scrollback; the alternate grid never grows, so its
//! `row_top` stays pinned at 0.

pub mod editing;
pub mod navigation;
pub mod row;
pub mod scroll;

use crate::cell::Cell;
use crate::index::Location;

pub use editing::EraseMode;
pub use row::Row;

/// The terminal's cell grid: cursor, scroll region, and a ring of rows
/// covering both scrollback (if retained) and the live viewport.
#[derive(Debug, Clone)]
pub struct Grid {
    max_rows: usize,
    max_cols: usize,
    cur: Location,
    saved: Location,
    scroll_top: usize,
    scroll_bottom: usize,
    rows: Vec<Row>,
    row_top: usize,
    retains_scrollback: bool,
    scrollback_length: usize,
    custom_scrollback_length: bool,
    pending_scroll_up: bool,
    pending_scroll_down: bool,
}

impl Grid {
    /// Create a new grid with the given viewport size.
    ///
    /// `retains_scrollback` is `true` for the primary grid (grows into
    /// history on scroll) and `false` for the alternate grid (each scroll
    /// recycles rows in place, no history kept).
    pub fn new(max_rows: usize, max_cols: usize, retains_scrollback: bool) -> Self {
        let max_rows = max_rows.max(1);
        let max_cols = max_cols.max(1);
        let rows = (0..max_rows).map(|_| Row::new(max_cols)).collect();

        Self {
            max_rows,
            max_cols,
            cur: Location::default(),
            saved: Location::default(),
            scroll_top: 0,
            scroll_bottom: max_rows - 1,
            rows,
            row_top: 0,
            retains_scrollback,
            scrollback_length: max_rows,
            custom_scrollback_length: false,
            pending_scroll_up: false,
            pending_scroll_down: false,
        }
    }

    /// Viewport row count.
    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// Viewport column count.
    pub fn max_cols(&self) -> usize {
        self.max_cols
    }

    /// Current cursor position, in visible coordinates.
    pub fn cur(&self) -> Location {
        self.cur
    }

    /// Saved (DECSC) cursor position, in visible coordinates.
    pub fn saved(&self) -> Location {
        self.saved
    }

    /// `DECSC`: copy the current cursor into the saved slot.
    pub fn save_cursor(&mut self) {
        self.saved = self.cur;
    }

    /// `DECRC`: restore the cursor from the saved slot.
    pub fn restore_cursor(&mut self) {
        self.cur = self.saved;
    }

    /// Inclusive scroll region, in visible coordinates.
    pub fn scroll_region(&self) -> (usize, usize) {
        (self.scroll_top, self.scroll_bottom)
    }

    /// Offset mapping a visible row to an absolute (ring) row.
    pub fn row_top(&self) -> usize {
        self.row_top
    }

    /// Total rows currently stored (scrollback + viewport).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// `true` for the primary grid (retains scrollback on scroll).
    pub fn retains_scrollback(&self) -> bool {
        self.retains_scrollback
    }

    /// Current scrollback cap (row count the primary grid may reach).
    pub fn scrollback_length(&self) -> usize {
        self.scrollback_length
    }

    /// Set the scrollback cap explicitly; marks it sticky so later
    /// `set_window_size` calls stop recomputing it from the row count.
    pub fn set_scrollback_length(&mut self, rows: usize) {
        self.scrollback_length = rows.max(self.max_rows);
        self.custom_scrollback_length = true;
    }

    /// Row at an absolute (ring) index.
    pub fn row_abs(&self, abs_row: usize) -> Option<&Row> {
        self.rows.get(abs_row)
    }

    /// Mutable row at an absolute (ring) index.
    pub fn row_abs_mut(&mut self, abs_row: usize) -> Option<&mut Row> {
        self.rows.get_mut(abs_row)
    }

    /// Row at a visible (viewport) index.
    pub fn row_visible(&self, row: usize) -> Option<&Row> {
        self.row_abs(self.row_top + row)
    }

    /// Mutable row at a visible (viewport) index.
    pub fn row_visible_mut(&mut self, row: usize) -> Option<&mut Row> {
        let abs = self.row_top + row;
        self.row_abs_mut(abs)
    }

    /// Cell at a visible `(row, col)`.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell> {
        self.row_visible(row)?.cells().get(col)
    }

    /// Mutable cell at a visible `(row, col)`.
    pub fn cell_at_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.row_visible_mut(row)?.cells_mut().get_mut(col)
    }

    /// Highest occupied column + 1 for an absolute row, 0 if empty or
    /// out of range.
    pub fn row_max_col(&self, abs_row: usize) -> usize {
        self.row_abs(abs_row).map_or(0, Row::max_col)
    }

    /// Resize the viewport, preserving content in the overlap and
    /// clamping the cursor. Growing the viewport pulls rows back from
    /// scrollback (or allocates fresh ones) rather than discarding
    /// history.
    pub fn set_window_size(&mut self, rows: usize, cols: usize) {
        self.flush_pending_scroll();
        let rows = rows.max(1);
        let cols = cols.max(1);

        if self.retains_scrollback && !self.custom_scrollback_length {
            self.scrollback_length = rows;
        }

        if rows == self.max_rows && cols == self.max_cols {
            return;
        }

        let old_row_count = self.rows.len();

        for row in &mut self.rows {
            row.resize_cols(cols);
        }
        while self.rows.len() < rows {
            self.rows.push(Row::new(cols));
        }

        self.row_top = if old_row_count < rows {
            0
        } else {
            self.rows.len() - rows
        };

        self.max_rows = rows;
        self.max_cols = cols;
        self.scroll_top = 0;
        self.scroll_bottom = rows - 1;

        if self.cur.row >= rows {
            self.cur.row = rows - 1;
        }
        if self.cur.col > cols {
            self.cur.col = cols;
        }
        if self.saved.row >= rows {
            self.saved.row = rows - 1;
        }
        if self.saved.col > cols {
            self.saved.col = cols;
        }
    }

    /// `true` when the cursor sits one column past the last column — a
    /// deferred wrap pending until the next printable character arrives.
    pub fn wrap_pending(&self) -> bool {
        self.cur.col >= self.max_cols
    }

    /// Set the cursor column directly, including to `max_cols` (deferred
    /// wrap). The clamped navigation primitives (`move_to`,
    /// `move_forward`, ...) never produce that value; only the print
    /// path does, so it reaches in here rather than going through them.
    pub(crate) fn set_print_col(&mut self, col: usize) {
        self.cur.col = col;
    }

    /// Materialize a scroll owed by a prior `move_down_or_scroll`/
    /// `move_up_or_scroll` call at the scroll boundary. That call leaves
    /// the cursor on the boundary row without touching row content, so a
    /// query made before the next row-consuming operation still sees the
    /// pre-scroll rows. Every operation that reads or writes "the
    /// current row" for a different purpose — printing a character,
    /// further cursor motion, editing — must flush first.
    pub(crate) fn flush_pending_scroll(&mut self) {
        if self.pending_scroll_up {
            self.pending_scroll_up = false;
            self.scroll_up(1);
        }
        if self.pending_scroll_down {
            self.pending_scroll_down = false;
            self.scroll_down(1);
        }
    }
}

#[cfg(test)]
mod tests;
