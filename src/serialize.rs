//! Region serializer: plain and SGR-annotated text extraction (§4.6).
//!
//! Both forms iterate the same absolute-coordinate range; the formatted
//! variant additionally tracks a running `CellAttrs` and emits a CSI SGR
//! sequence whenever a cell's attributes differ from it. The fixed
//! six-slot grouping (fg, bg, bold, italic, underline, inverse) mirrors
//! the original implementation's `attr_codes` array rather than
//! reinventing an encoding.

use crate::cell::CellAttrs;
use crate::color::Color;
use crate::grid::Grid;
use crate::index::Location;

/// Plain-text serialization of `[start, end)`, trailing blanks per row
/// stripped, rows joined by `\n` except where the earlier row is marked
/// `wrapped`.
pub fn get_string_plaintext(grid: &Grid, start: Location, end: Location) -> String {
    serialize(grid, start, end, false)
}

/// Like `get_string_plaintext`, but interleaves `CSI ... m` sequences for
/// every attribute transition.
pub fn get_string_formatted(grid: &Grid, start: Location, end: Location) -> String {
    serialize(grid, start, end, true)
}

fn serialize(grid: &Grid, start: Location, end: Location, formatted: bool) -> String {
    if end.row < start.row || (end.row == start.row && end.col <= start.col) {
        return String::new();
    }

    let mut out = String::with_capacity(8);
    let mut running = CellAttrs::default();

    for abs_row in start.row..=end.row {
        let Some(row) = grid.row_abs(abs_row) else { continue };
        let occupied = grid.row_max_col(abs_row);

        let row_start = if abs_row == start.row { start.col } else { 0 };
        let row_end = if abs_row == end.row { end.col.min(occupied) } else { occupied };

        let mut col = row_start;
        while col < row_end {
            let cell = &row.cells()[col];

            if formatted {
                emit_sgr_if_changed(&mut out, &mut running, cell.attrs);
            }

            if cell.is_empty() {
                out.push(' ');
                col += 1;
            } else {
                out.push_str(cell.as_str());
                col += if cell.is_wide { 2 } else { 1 };
            }
        }

        if abs_row != end.row && !row.wrapped {
            out.push('\n');
        }
    }

    out
}

/// Emit `CSI ... m` for exactly the attribute fields that changed between
/// `running` and `next`, then update `running`. A full return to the
/// default set collapses to a bare `CSI 0 m` rather than six reset codes.
fn emit_sgr_if_changed(out: &mut String, running: &mut CellAttrs, next: CellAttrs) {
    if next == *running {
        return;
    }

    if next == CellAttrs::default() {
        out.push_str("\x1b[0m");
        *running = next;
        return;
    }

    let mut codes: Vec<String> = Vec::with_capacity(6);
    if next.fg != running.fg {
        codes.push(color_code(next.fg, 30, 38, 39));
    }
    if next.bg != running.bg {
        codes.push(color_code(next.bg, 40, 48, 49));
    }
    if next.bold != running.bold {
        codes.push(if next.bold { "1".to_string() } else { "22".to_string() });
    }
    if next.italic != running.italic {
        codes.push(if next.italic { "3".to_string() } else { "23".to_string() });
    }
    if next.underline != running.underline {
        codes.push(if next.underline { "4".to_string() } else { "24".to_string() });
    }
    if next.inverse != running.inverse {
        codes.push(if next.inverse { "7".to_string() } else { "27".to_string() });
    }

    if !codes.is_empty() {
        out.push_str("\x1b[");
        out.push_str(&codes.join(";"));
        out.push('m');
    }
    *running = next;
}

/// Encode one color as the SGR code(s) the serializer emits: `base+n` for
/// the eight classic indexed slots, `extended;5;n` for the rest of the
/// 256-color palette, `extended;2;r;g;b` for direct color, `default` for
/// `Color::Default`.
fn color_code(color: Color, base: u32, extended: u32, default: u32) -> String {
    match color {
        Color::Default => default.to_string(),
        Color::Indexed(n) if n < 8 => (base + n as u32).to_string(),
        Color::Indexed(n) => format!("{extended};5;{n}"),
        Color::Rgb(r, g, b) => format!("{extended};2;{r};{g};{b}"),
    }
}
