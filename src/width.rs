//! Unicode display-width oracle.
//!
//! Maps a codepoint to the number of terminal columns it occupies: 0 for
//! combining/zero-width characters, 1 for ordinary glyphs, 2 for wide
//! East-Asian glyphs and the enumerated astral-plane emoji blocks.

use unicode_width::UnicodeWidthChar;

/// Astral-plane emoji blocks rendered as double-width by most terminals,
/// even though they're not East-Asian-Wide per UAX #11. BMP emoji (e.g.
/// the dingbats block) are left at width 1 to match typical monospace
/// fonts, per the oracle's contract.
///
/// Sorted, non-overlapping, inclusive `[start, end]` ranges — searched by
/// binary search.
const EMOJI_WIDE_RANGES: &[(u32, u32)] = &[
    (0x1F300, 0x1F5FF), // Miscellaneous Symbols and Pictographs
    (0x1F600, 0x1F64F), // Emoticons
    (0x1F680, 0x1F6FF), // Transport and Map Symbols
    (0x1F700, 0x1F77F), // Alchemical Symbols
    (0x1F780, 0x1F7FF), // Geometric Shapes Extended
    (0x1F800, 0x1F8FF), // Supplemental Arrows-C
    (0x1F900, 0x1F9FF), // Supplemental Symbols and Pictographs
    (0x1FA00, 0x1FA6F), // Chess Symbols
    (0x1FA70, 0x1FAFF), // Symbols and Pictographs Extended-A
];

/// SOFT HYPHEN is forced to zero-width: terminals don't word-wrap, so a
/// hyphenation hint has nothing to attach to.
const SOFT_HYPHEN: char = '\u{ad}';

fn is_wide_emoji(ch: char) -> bool {
    let cp = ch as u32;
    if cp <= 0xFFFF {
        return false;
    }
    EMOJI_WIDE_RANGES
        .binary_search_by(|&(lo, hi)| {
            if cp < lo {
                std::cmp::Ordering::Greater
            } else if cp > hi {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Display width of `ch` in terminal columns: 0, 1, or 2.
pub fn char_width(ch: char) -> u8 {
    if ch == SOFT_HYPHEN {
        return 0;
    }

    match UnicodeWidthChar::width(ch) {
        None => 0,
        Some(0) => 0,
        Some(w) => {
            if w >= 2 || is_wide_emoji(ch) {
                2
            } else {
                1
            }
        }
    }
}

/// `true` if `ch` contributes no column width of its own (combining marks,
/// zero-width joiners/formatters, soft hyphen) and should instead be
/// appended to the preceding cell.
pub fn is_zero_width(ch: char) -> bool {
    char_width(ch) == 0
}
