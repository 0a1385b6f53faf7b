//! Terminal cell types.
//!
//! A `Cell` represents one character position in the terminal grid: up to
//! 8 bytes of UTF-8 (one base glyph plus any combining marks appended and
//! re-normalized to NFC), the attribute set active when it was written,
//! and a wide-glyph flag.

use unicode_normalization::UnicodeNormalization;

use crate::color::Color;

/// Capacity of a cell's inline content buffer, in bytes.
const CONTENTS_CAP: usize = 8;

/// Per-cell style bits plus foreground/background color.
///
/// Equality is structural equality of every field — this is exactly what
/// the region serializer needs to detect attribute transitions between
/// adjacent cells with a single compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellAttrs {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub inverse: bool,
}

/// One character position in the terminal grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    contents: [u8; CONTENTS_CAP],
    len: u8,
    pub attrs: CellAttrs,
    pub is_wide: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            contents: [0; CONTENTS_CAP],
            len: 0,
            attrs: CellAttrs::default(),
            is_wide: false,
        }
    }
}

impl Cell {
    /// Build a cell holding a single base glyph with the given attributes.
    ///
    /// `text` is expected to be a single base character's UTF-8 encoding;
    /// bytes beyond the 8-byte capacity are silently dropped (a lone base
    /// glyph is never wider than 4 bytes, so this only bites combining
    /// sequences built via repeated `push_combining`).
    pub fn new(text: &str, attrs: CellAttrs, is_wide: bool) -> Self {
        let mut cell = Self {
            contents: [0; CONTENTS_CAP],
            len: 0,
            attrs,
            is_wide,
        };
        let n = text.len().min(CONTENTS_CAP);
        cell.contents[..n].copy_from_slice(&text.as_bytes()[..n]);
        cell.len = n as u8;
        cell
    }

    /// The cell's text content as a `&str`.
    ///
    /// Always valid UTF-8: `contents[..len]` is only ever written via
    /// `Cell::new`/`push_combining`, both of which copy from a `&str`.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.contents[..self.len as usize]).unwrap_or("")
    }

    /// Number of valid bytes in `contents`. `len == 0` means empty/erased.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// `true` if this cell is empty (erased or never written) — distinct
    /// from a cell holding an explicit space.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clear this cell's content without touching its attributes.
    ///
    /// Used by `erase_characters`, which blanks but must not reset style.
    pub fn clear_content(&mut self) {
        self.contents = [0; CONTENTS_CAP];
        self.len = 0;
    }

    /// Reset the cell entirely, as if freshly allocated with `attrs` as
    /// the active default attribute state (used by clear/kill operations,
    /// which blank *and* reset to the writer's current attributes).
    pub fn reset(&mut self, attrs: CellAttrs) {
        *self = Self {
            contents: [0; CONTENTS_CAP],
            len: 0,
            attrs,
            is_wide: false,
        };
    }

    /// Append a combining/zero-width character to this cell's content and
    /// re-normalize to NFC.
    ///
    /// If the normalized result doesn't fit in 8 bytes, it's truncated to
    /// the longest whole-character prefix that does — silently, per the
    /// design's combining-mark truncation policy.
    pub fn push_combining(&mut self, ch: char) {
        let mut buf = String::with_capacity(self.len() + ch.len_utf8());
        buf.push_str(self.as_str());
        buf.push(ch);
        let normalized: String = buf.nfc().collect();

        let mut fit = 0usize;
        for c in normalized.chars() {
            let clen = c.len_utf8();
            if fit + clen > CONTENTS_CAP {
                break;
            }
            fit += clen;
        }

        self.contents = [0; CONTENTS_CAP];
        self.contents[..fit].copy_from_slice(&normalized.as_bytes()[..fit]);
        self.len = fit as u8;
    }
}
