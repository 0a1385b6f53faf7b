//! Screen: the terminal's public state machine.
//!
//! `Screen` owns the primary grid, an optional alternate grid, the
//! attribute state new writes pick up, title/icon-name buffers, and the
//! mode/notification flags in `ScreenFlags`. It processes a raw host byte
//! stream through `vte::Parser` (see `handler`), dispatching into the
//! `Grid` operations that actually mutate cells. `Screen` performs no I/O
//! of its own and is single-threaded and non-reentrant: nothing here may
//! suspend, block, or call back into a caller mid-`process_string`.

mod handler;
pub mod mode;

pub use mode::ScreenFlags;

use vte::Parser;

use crate::cell::CellAttrs;
use crate::grid::Grid;
use crate::index::Location;
use crate::{serialize, width};

/// The terminal's in-memory screen model.
///
/// Generic over nothing: the engine is headless (§1), so there is no
/// event-listener type parameter to thread through — callers poll
/// `Screen::flags()`/`Screen::take_notifications()` instead of receiving
/// callbacks during `process_string`.
#[derive(Debug)]
pub struct Screen {
    /// Primary grid (retains scrollback).
    grid: Grid,
    /// Alternate grid, present only while alt-screen mode is active.
    /// Created fresh on entry, dropped on exit (§3 lifecycle).
    alt: Option<Grid>,
    /// Attribute state newly printed cells pick up; mutated by SGR.
    attrs: CellAttrs,
    /// Mode and transient notification flags.
    flags: ScreenFlags,
    /// Window title (OSC 0/2).
    title: String,
    /// Icon name (OSC 0/1).
    icon_name: String,
    /// Byte-level lexer. Only ever advanced over a *complete* prefix (see
    /// `trailing_incomplete_boundary`), so it always returns to its
    /// ground state by the end of a `process_string` call; kept as a
    /// field anyway so a sequence is never reparsed from scratch.
    parser: Parser,
    /// `true` once a character has been printed without an intervening
    /// control/escape sequence — the "start of a print batch" marker the
    /// phantom-clearing rule in §4.3 checks once per batch, not once per
    /// character.
    in_print_run: bool,
}

impl Screen {
    /// Create a new screen with the given viewport size. Scrollback
    /// defaults to the viewport's row count (§4, scenario 2); call
    /// `set_scrollback_length` to override.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: Grid::new(rows, cols, true),
            alt: None,
            attrs: CellAttrs::default(),
            flags: ScreenFlags::default(),
            title: String::new(),
            icon_name: String::new(),
            parser: Parser::new(),
            in_print_run: false,
        }
    }

    /// Resize the viewport. Applies to both grids so a resize while in
    /// the alternate screen doesn't desync the primary grid's dimensions
    /// from what a subsequent `swap_alt` would expect.
    pub fn set_window_size(&mut self, rows: usize, cols: usize) {
        self.grid.set_window_size(rows, cols);
        if let Some(alt) = &mut self.alt {
            alt.set_window_size(rows, cols);
        }
    }

    /// Set the primary grid's scrollback cap; marks it sticky (§6).
    pub fn set_scrollback_length(&mut self, rows: usize) {
        self.grid.set_scrollback_length(rows);
    }

    /// The active grid (primary, or alternate while alt-screen is on).
    pub fn grid(&self) -> &Grid {
        self.alt.as_ref().unwrap_or(&self.grid)
    }

    fn grid_mut(&mut self) -> &mut Grid {
        self.alt.as_mut().unwrap_or(&mut self.grid)
    }

    /// `true` while the alternate screen is active.
    pub fn is_alt_screen(&self) -> bool {
        self.alt.is_some()
    }

    /// Current mode/notification flags.
    pub fn flags(&self) -> ScreenFlags {
        self.flags
    }

    /// Drain and clear the transient notification bits
    /// (`visual_bell`/`audible_bell`/`update_title`/`update_icon_name`/
    /// `dirty`), returning the bits that were set. Sticky mode bits
    /// (`hide_cursor`, mouse reporting, ...) are untouched — the caller
    /// is responsible for clearing transient flags after consumption
    /// (§4.5); this is the one place that does it, in a single batch.
    pub fn take_notifications(&mut self) -> ScreenFlags {
        let fired = self.flags & ScreenFlags::TRANSIENT;
        self.flags.remove(ScreenFlags::TRANSIENT);
        fired
    }

    /// Current window title (OSC 0/2).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current icon name (OSC 0/1).
    pub fn icon_name(&self) -> &str {
        &self.icon_name
    }

    fn set_title(&mut self, title: String) {
        self.title = title;
        self.flags.insert(ScreenFlags::UPDATE_TITLE);
    }

    fn set_icon_name(&mut self, name: String) {
        self.icon_name = name;
        self.flags.insert(ScreenFlags::UPDATE_ICON_NAME);
    }

    /// Cell at a visible `(row, col)` on the active grid.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&crate::cell::Cell> {
        self.grid().cell_at(row, col)
    }

    /// Highest occupied column + 1 for an absolute row on the active
    /// grid, 0 if empty or out of range.
    pub fn row_max_col(&self, abs_row: usize) -> usize {
        self.grid().row_max_col(abs_row)
    }

    /// Plain-text serialization of `[start, end)` on the active grid.
    pub fn get_string_plaintext(&self, start: Location, end: Location) -> String {
        serialize::get_string_plaintext(self.grid(), start, end)
    }

    /// SGR-annotated serialization of `[start, end)` on the active grid.
    pub fn get_string_formatted(&self, start: Location, end: Location) -> String {
        serialize::get_string_formatted(self.grid(), start, end)
    }

    /// Feed a chunk of host bytes through the parser, returning the
    /// number of leading bytes actually consumed.
    ///
    /// A sequence truncated at the end of `bytes` is *not* consumed
    /// (§4.2, §6): `trailing_incomplete_boundary` finds the longest
    /// prefix that ends on a completed token — a full C0 control, an
    /// entire UTF-8 character, or a whole CSI/OSC/DCS/ESC sequence — and
    /// only that prefix is handed to `vte::Parser`. The caller is
    /// expected to re-present `bytes[consumed..]` together with
    /// whatever it feeds next (§8 scenario 6).
    ///
    /// This withholding happens before any byte reaches `vte::Parser`,
    /// which has no way to report it on its own: every byte passed to
    /// `Parser::advance` is considered consumed by that crate's own
    /// contract, even mid-sequence.
    pub fn process_string(&mut self, bytes: &[u8]) -> usize {
        let consumed = trailing_incomplete_boundary(bytes);
        let mut parser = std::mem::replace(&mut self.parser, Parser::new());
        parser.advance(self, &bytes[..consumed]);
        self.parser = parser;
        consumed
    }

    /// Print a run of ASCII bytes directly, bypassing the parser. Each
    /// byte is a printable 7-bit character; combining marks can't appear
    /// (they're multi-byte in UTF-8), so every byte in an ASCII run is
    /// width 1 or 2 (wide East-Asian codepoints are never ASCII).
    pub fn show_string_ascii(&mut self, bytes: &[u8]) {
        self.show_chars(bytes.iter().map(|&b| b as char));
    }

    /// Print a run of UTF-8 text directly, bypassing the parser.
    pub fn show_string_utf8(&mut self, text: &str) {
        self.show_chars(text.chars());
    }

    fn show_chars(&mut self, chars: impl Iterator<Item = char>) {
        let mut wrote_any = false;
        let mut first = true;
        for ch in chars {
            if first {
                self.clear_phantom_on_batch_start();
                first = false;
            }
            self.print_char(ch);
            wrote_any = true;
        }
        if wrote_any {
            self.flags.insert(ScreenFlags::DIRTY);
        }
    }

    /// Before the first character of a batch, if the cell to the
    /// cursor's immediate left is wide (the cursor sits on its phantom
    /// column), clear it — otherwise a non-wide overwrite of the phantom
    /// leaves a stale double-wide glyph with no phantom backing it.
    fn clear_phantom_on_batch_start(&mut self) {
        let grid = self.grid_mut();
        grid.flush_pending_scroll();
        let (row, col) = (grid.cur().row, grid.cur().col);
        if col == 0 {
            return;
        }
        if let Some(left) = grid.cell_at_mut(row, col - 1) {
            if left.is_wide {
                left.clear_content();
                left.is_wide = false;
            }
        }
    }

    fn append_combining(&mut self, ch: char) {
        let grid = self.grid_mut();
        let (row, col) = (grid.cur().row, grid.cur().col);
        if col > 0 {
            if let Some(cell) = grid.cell_at_mut(row, col - 1) {
                cell.push_combining(ch);
            }
        } else if row > 0 {
            let prev_wrapped = grid.row_visible(row - 1).is_some_and(|r| r.wrapped);
            if prev_wrapped {
                let last_col = grid.max_cols() - 1;
                if let Some(cell) = grid.cell_at_mut(row - 1, last_col) {
                    cell.push_combining(ch);
                }
            }
        }
        // Otherwise (row 0, col 0) there's no preceding cell: discarded.
    }

    fn print_char(&mut self, ch: char) {
        let w = width::char_width(ch) as usize;
        if w == 0 {
            self.append_combining(ch);
            return;
        }

        let attrs = self.attrs;
        let grid = self.grid_mut();
        grid.flush_pending_scroll();
        if grid.cur().col + w > grid.max_cols() {
            let row = grid.cur().row;
            if let Some(r) = grid.row_visible_mut(row) {
                r.wrapped = true;
            }
            grid.move_down_or_scroll();
            grid.carriage_return();
            // `move_down_or_scroll` only *defers* a boundary scroll
            // (`cur.row` stays put, a flag is raised) — flush it now so
            // the write below lands on the fresh post-scroll row instead
            // of clobbering the pre-scroll bottom row.
            grid.flush_pending_scroll();
        }

        let (row, col) = (grid.cur().row, grid.cur().col);
        let mut buf = [0u8; 4];
        let text = ch.encode_utf8(&mut buf);
        if let Some(cell) = grid.cell_at_mut(row, col) {
            *cell = crate::cell::Cell::new(text, attrs, w == 2);
        }
        if w == 2 {
            if let Some(phantom) = grid.cell_at_mut(row, col + 1) {
                phantom.clear_content();
            }
        }
        grid.set_print_col(col + w);
    }

    /// Enter the alternate screen, optionally saving the primary
    /// cursor first (mode 1049 saves/restores; 47/1047 don't — §4.2).
    /// A no-op if already in the alternate screen.
    pub fn enter_alt_screen(&mut self, save_cursor: bool) {
        if self.alt.is_some() {
            return;
        }
        if save_cursor {
            self.grid.save_cursor();
        }
        let (rows, cols) = (self.grid.max_rows(), self.grid.max_cols());
        self.alt = Some(Grid::new(rows, cols, false));
        self.flags.insert(ScreenFlags::DIRTY);
    }

    /// Leave the alternate screen, dropping it and restoring the primary
    /// grid exactly as it was (§3 lifecycle); optionally restores the
    /// saved cursor (mode 1049). A no-op if not in the alternate screen.
    pub fn leave_alt_screen(&mut self, restore_cursor: bool) {
        if self.alt.take().is_some() && restore_cursor {
            self.grid.restore_cursor();
        }
        self.flags.insert(ScreenFlags::DIRTY);
    }
}

/// Byte-level states `trailing_incomplete_boundary` walks through. Mirrors
/// the token shapes spec §4.2 tabulates — C0/text, ESC, ESC-intermediate,
/// CSI, OSC (plus its `ESC \` terminator), DCS (plus terminator) — closely
/// enough to find token boundaries without duplicating `vte`'s dispatch.
#[derive(Clone, Copy)]
enum ScanState {
    Ground,
    Utf8(u8),
    Escape,
    EscapeIntermediate,
    Csi,
    Osc,
    OscEscape,
    Dcs,
    DcsEscape,
}

/// Number of continuation bytes a UTF-8 lead byte expects, or `None` if
/// `lead` isn't a valid multi-byte lead byte.
fn utf8_extra_bytes(lead: u8) -> Option<u8> {
    if lead & 0xe0 == 0xc0 {
        Some(1)
    } else if lead & 0xf0 == 0xe0 {
        Some(2)
    } else if lead & 0xf8 == 0xf0 {
        Some(3)
    } else {
        None
    }
}

/// Find the longest prefix of `bytes` that ends on a completed token: a
/// whole C0 control or printable byte, an entire UTF-8 character, or a
/// fully terminated CSI/OSC/DCS/ESC sequence. Bytes past this point are
/// the start of a sequence still awaiting more input and must not be
/// handed to the parser yet (see `process_string`).
fn trailing_incomplete_boundary(bytes: &[u8]) -> usize {
    let mut state = ScanState::Ground;
    let mut boundary = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        let b = bytes[i];
        match state {
            ScanState::Ground => {
                if b == 0x1b {
                    state = ScanState::Escape;
                    i += 1;
                } else if b < 0x80 {
                    i += 1;
                    boundary = i;
                } else if let Some(extra) = utf8_extra_bytes(b) {
                    state = ScanState::Utf8(extra);
                    i += 1;
                } else {
                    // Invalid lead byte: nothing to wait for: drop it.
                    i += 1;
                    boundary = i;
                }
            }
            ScanState::Utf8(remaining) => {
                if b & 0xc0 == 0x80 {
                    i += 1;
                    state = if remaining == 1 {
                        boundary = i;
                        ScanState::Ground
                    } else {
                        ScanState::Utf8(remaining - 1)
                    };
                } else {
                    // Malformed continuation byte: bail out without
                    // consuming it, and reprocess it fresh as Ground.
                    boundary = i;
                    state = ScanState::Ground;
                }
            }
            ScanState::Escape => match b {
                b'[' => {
                    state = ScanState::Csi;
                    i += 1;
                }
                b']' => {
                    state = ScanState::Osc;
                    i += 1;
                }
                b'P' | b'X' | b'^' | b'_' => {
                    state = ScanState::Dcs;
                    i += 1;
                }
                0x20..=0x2f => {
                    state = ScanState::EscapeIntermediate;
                    i += 1;
                }
                _ => {
                    // Any other byte is ESC's single final byte.
                    i += 1;
                    boundary = i;
                    state = ScanState::Ground;
                }
            },
            ScanState::EscapeIntermediate => match b {
                0x20..=0x2f => i += 1,
                _ => {
                    i += 1;
                    boundary = i;
                    state = ScanState::Ground;
                }
            },
            ScanState::Csi => match b {
                0x20..=0x3f => i += 1,
                _ => {
                    i += 1;
                    boundary = i;
                    state = ScanState::Ground;
                }
            },
            ScanState::Osc => match b {
                0x07 => {
                    i += 1;
                    boundary = i;
                    state = ScanState::Ground;
                }
                0x1b => {
                    state = ScanState::OscEscape;
                    i += 1;
                }
                _ => i += 1,
            },
            ScanState::OscEscape => {
                if b == b'\\' {
                    i += 1;
                    boundary = i;
                    state = ScanState::Ground;
                } else {
                    // Not a valid ST; the ESC was part of the string.
                    state = ScanState::Osc;
                }
            }
            ScanState::Dcs => match b {
                0x1b => {
                    state = ScanState::DcsEscape;
                    i += 1;
                }
                _ => i += 1,
            },
            ScanState::DcsEscape => {
                if b == b'\\' {
                    i += 1;
                    boundary = i;
                    state = ScanState::Ground;
                } else {
                    state = ScanState::Dcs;
                }
            }
        }
    }

    boundary
}

#[cfg(test)]
mod tests;
