//! Scrolling, insert/delete-lines, and the scroll region.
//!
//! Two scroll paths exist: an in-place recycle (scroll region active, or
//! the alternate grid, which never grows) and primary-grid growth (the
//! common case — the full viewport scrolls, rows accumulate into
//! scrollback up to `scrollback_length`).

use super::Grid;

impl Grid {
    /// `DECSTBM`-style scroll region, in visible row coordinates
    /// (inclusive). `left`/`right` mirror the original column-range
    /// parameters; the parser never drives them away from the full
    /// width (column-range/"vertical" scroll regions are out of scope),
    /// but the direct endpoint accepts them and warns, matching the
    /// original implementation's contract.
    pub fn set_scroll_region(&mut self, top: usize, bottom: usize, left: usize, right: usize) {
        if left > 0 || right < self.max_cols.saturating_sub(1) {
            log::warn!(
                "column-range scroll regions are not supported; ignoring left={left}, right={right}"
            );
        }

        let top = top.min(self.max_rows - 1);
        let bottom = bottom.min(self.max_rows - 1);
        if top >= bottom {
            return;
        }
        self.scroll_top = top;
        self.scroll_bottom = bottom;
    }

    fn region_is_active(&self) -> bool {
        self.scroll_top != 0 || self.scroll_bottom != self.max_rows - 1
    }

    /// Scroll the region (or the full primary grid) up by `n` lines:
    /// content moves toward row 0, fresh blank rows appear at the
    /// bottom.
    pub fn scroll_up(&mut self, n: usize) {
        if n == 0 {
            return;
        }

        if self.region_is_active() || !self.retains_scrollback {
            self.recycle_region_up(n);
        } else {
            self.grow_primary_up(n);
        }
    }

    /// Scroll the region down by `n` lines: content moves toward the
    /// bottom, fresh blank rows appear at the top. Never touches
    /// scrollback.
    pub fn scroll_down(&mut self, n: usize) {
        if n == 0 {
            return;
        }

        let top_abs = self.row_top + self.scroll_top;
        let bottom_abs = self.row_top + self.scroll_bottom;
        let height = bottom_abs - top_abs + 1;

        if n >= height {
            self.reset_range(top_abs, bottom_abs);
            return;
        }

        let region = &mut self.rows[top_abs..=bottom_abs];
        region.rotate_right(n);
        let cols = self.max_cols;
        for row in &mut self.rows[top_abs..top_abs + n] {
            *row = super::Row::new(cols);
        }
    }

    fn recycle_region_up(&mut self, n: usize) {
        let top_abs = self.row_top + self.scroll_top;
        let bottom_abs = self.row_top + self.scroll_bottom;
        let height = bottom_abs - top_abs + 1;

        if n >= height {
            self.reset_range(top_abs, bottom_abs);
            return;
        }

        let region = &mut self.rows[top_abs..=bottom_abs];
        region.rotate_left(n);
        let cols = self.max_cols;
        for row in &mut self.rows[bottom_abs + 1 - n..=bottom_abs] {
            *row = super::Row::new(cols);
        }
    }

    fn grow_primary_up(&mut self, n: usize) {
        let cols = self.max_cols;
        for _ in 0..n {
            self.rows.push(super::Row::new(cols));
        }
        if self.rows.len() > self.scrollback_length {
            let overflow = self.rows.len() - self.scrollback_length;
            self.rows.drain(0..overflow);
        }
        self.row_top = self.rows.len() - self.max_rows;
    }

    fn reset_range(&mut self, start_abs: usize, end_abs: usize) {
        let cols = self.max_cols;
        for row in &mut self.rows[start_abs..=end_abs] {
            *row = super::Row::new(cols);
        }
    }

    /// Insert `n` blank rows at the cursor, shifting rows down within
    /// `[cur.row, scroll_bottom]`. Rows pushed past `scroll_bottom` are
    /// discarded. Saturating (`n` ≥ region height) falls through to a
    /// full clear of the region.
    pub fn insert_lines(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        self.flush_pending_scroll();

        let top_abs = self.row_top + self.cur.row;
        let bottom_abs = self.row_top + self.scroll_bottom;
        if top_abs > bottom_abs {
            return;
        }
        let height = bottom_abs - top_abs + 1;

        if n >= height {
            self.reset_range(top_abs, bottom_abs);
            return;
        }

        let region = &mut self.rows[top_abs..=bottom_abs];
        region.rotate_right(n);
        let cols = self.max_cols;
        for row in &mut self.rows[top_abs..top_abs + n] {
            *row = super::Row::new(cols);
        }
    }

    /// Delete `n` rows at the cursor, shifting rows up within
    /// `[cur.row, scroll_bottom]` and filling the vacated bottom rows
    /// with blanks. Saturating falls through to a full clear of the
    /// region.
    pub fn delete_lines(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        self.flush_pending_scroll();

        let top_abs = self.row_top + self.cur.row;
        let bottom_abs = self.row_top + self.scroll_bottom;
        if top_abs > bottom_abs {
            return;
        }
        let height = bottom_abs - top_abs + 1;

        if n >= height {
            self.reset_range(top_abs, bottom_abs);
            return;
        }

        let region = &mut self.rows[top_abs..=bottom_abs];
        region.rotate_left(n);
        let cols = self.max_cols;
        for row in &mut self.rows[bottom_abs + 1 - n..=bottom_abs] {
            *row = super::Row::new(cols);
        }
    }
}
