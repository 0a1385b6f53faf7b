//! Cursor motion: clamped relative moves, absolute moves, and the
//! boundary-triggered "move or scroll" operations that back LF/RI.

use super::Grid;

impl Grid {
    /// Move the cursor up by `n` rows, clamped to row 0. Not confined to
    /// the scroll region — plain cursor motion ignores it; only
    /// `move_up_or_scroll`/`move_down_or_scroll` respect the boundary.
    pub fn move_up(&mut self, n: usize) {
        self.flush_pending_scroll();
        self.cur.row = self.cur.row.saturating_sub(n);
    }

    /// Move the cursor down by `n` rows, clamped to the last row.
    pub fn move_down(&mut self, n: usize) {
        self.flush_pending_scroll();
        self.cur.row = (self.cur.row + n).min(self.max_rows - 1);
    }

    /// Move the cursor forward (right) by `n` columns, clamped to the
    /// last column.
    pub fn move_forward(&mut self, n: usize) {
        self.cur.col = (self.cur.col + n).min(self.max_cols - 1);
    }

    /// Move the cursor backward (left) by `n` columns, clamped to 0.
    pub fn move_backward(&mut self, n: usize) {
        self.cur.col = self.cur.col.saturating_sub(n);
    }

    /// Move the cursor to an absolute column, clamped to the last column.
    pub fn move_to_column(&mut self, col: usize) {
        self.cur.col = col.min(self.max_cols - 1);
    }

    /// Move the cursor to an absolute `(row, col)`, clamping both axes
    /// independently.
    ///
    /// This is a pure clamp: the design's resolved Open Question is that
    /// `move_to` never triggers a scroll, even if `row` would fall
    /// outside the scroll region. `move_down_or_scroll`/
    /// `move_up_or_scroll` are the only scroll-on-motion paths.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.flush_pending_scroll();
        self.cur.row = row.min(self.max_rows - 1);
        self.cur.col = col.min(self.max_cols - 1);
    }

    /// `CR`: cursor column to 0.
    pub fn carriage_return(&mut self) {
        self.cur.col = 0;
    }

    /// `BS`: cursor left one column, clamped to 0. A deferred-wrap
    /// position (`cur.col == max_cols`) snaps back to `max_cols - 1`
    /// like any other column, since `max_cols > 0` always holds.
    pub fn backspace(&mut self) {
        if self.cur.col > 0 {
            self.cur.col -= 1;
        }
    }

    /// `HT`: advance to the next 8-column tab stop, clamped to the right
    /// margin.
    pub fn tab(&mut self) {
        let next = (self.cur.col / 8 + 1) * 8;
        self.cur.col = next.min(self.max_cols - 1);
    }

    /// Cancel a pending deferred wrap (`cur.col == max_cols`), snapping
    /// back to the last real column. Any cursor-moving operation other
    /// than the next printable character resolves the pending wrap this
    /// way — otherwise an explicit `LF` right after filling the last
    /// column would carry the sentinel column to the new row and cause
    /// a spurious extra wrap on the following character.
    fn resolve_wrap_pending(&mut self) {
        if self.cur.col >= self.max_cols {
            self.cur.col = self.max_cols - 1;
        }
    }

    /// `LF`/`VT`/`FF`/index: move down one row, or scroll the region up
    /// by one line if the cursor is on the scroll boundary.
    ///
    /// The scroll itself is deferred: the cursor stays on the boundary
    /// row and `pending_scroll_up` is raised rather than scrolling right
    /// away. This mirrors the deferred column wrap — a trailing newline
    /// at the bottom of the screen shouldn't evict a scrollback row
    /// until something actually needs the space, so queries made before
    /// the next print still see the pre-scroll content.
    pub fn move_down_or_scroll(&mut self) {
        self.resolve_wrap_pending();
        self.flush_pending_scroll();
        if self.cur.row == self.scroll_bottom {
            self.pending_scroll_up = true;
        } else if self.cur.row + 1 < self.max_rows {
            self.cur.row += 1;
        }
    }

    /// Reverse index: move up one row, or scroll the region down by one
    /// line if the cursor is on the scroll boundary. Deferred the same
    /// way as `move_down_or_scroll`.
    pub fn move_up_or_scroll(&mut self) {
        self.resolve_wrap_pending();
        self.flush_pending_scroll();
        if self.cur.row == self.scroll_top {
            self.pending_scroll_down = true;
        } else if self.cur.row > 0 {
            self.cur.row -= 1;
        }
    }
}
