//! `vte::Perform` implementation: the byte-level lexer's dispatch target.
//!
//! `vte::Parser` recognizes the lexical shape of C0 controls, CSI, OSC,
//! DCS, and ESC sequences and calls back into whichever of these methods
//! matches; this module owns translating that into the `Grid`/`Screen`
//! operations tabulated in spec §4.2. Unknown finals, unknown SGR codes,
//! and malformed parameter lists are silently discarded (§7) — there is
//! no diagnostic sink for them, only `log::trace!`.

use vte::{Params, Perform};

use crate::cell::CellAttrs;
use crate::color::Color;
use crate::grid::EraseMode;

use super::{Screen, ScreenFlags};

/// First subparam of group `idx`, or `default` if the group is absent or
/// its leading value is `0` — the "empty field defaults" rule most CSI
/// finals use (cursor motion, insert/delete, scroll all default to 1).
fn param(params: &Params, idx: usize, default: u16) -> u16 {
    match params.iter().nth(idx).and_then(|g| g.first()) {
        Some(&0) | None => default,
        Some(&n) => n,
    }
}

/// Same as `param`, but `0` is a meaningful value (erase-mode selectors)
/// rather than a stand-in for "use the default".
fn param_zero_ok(params: &Params, idx: usize, default: u16) -> u16 {
    params.iter().nth(idx).and_then(|g| g.first()).copied().unwrap_or(default)
}

fn indexed_or_rgb(seq: &mut std::slice::Iter<u16>) -> Option<Color> {
    match seq.next()? {
        2 => {
            let r = *seq.next()? as u8;
            let g = *seq.next()? as u8;
            let b = *seq.next()? as u8;
            Some(Color::Rgb(r, g, b))
        }
        5 => Some(Color::Indexed(*seq.next()? as u8)),
        _ => None,
    }
}

impl Screen {
    /// Apply the SGR (`CSI ... m`) codes named in spec §4.2. Codes that
    /// consume following subparams (`38;5;n`, `38;2;r;g;b`, and the `48`
    /// background equivalents) are read from a flat iterator over every
    /// subparam across all groups, since xterm accepts both the
    /// semicolon- and colon-separated forms and `vte` normalizes colon
    /// subparams into the same group.
    fn apply_sgr(&mut self, params: &Params) {
        let flat: Vec<u16> = params.iter().flat_map(|g| g.iter().copied()).collect();
        if flat.is_empty() {
            self.attrs = CellAttrs::default();
            return;
        }

        let mut iter = flat.iter();
        while let Some(&code) = iter.next() {
            match code {
                0 => self.attrs = CellAttrs::default(),
                1 => self.attrs.bold = true,
                3 => self.attrs.italic = true,
                4 => self.attrs.underline = true,
                7 => self.attrs.inverse = true,
                21 | 22 => self.attrs.bold = false,
                23 => self.attrs.italic = false,
                24 => self.attrs.underline = false,
                27 => self.attrs.inverse = false,
                30..=37 => self.attrs.fg = Color::Indexed((code - 30) as u8),
                38 => {
                    if let Some(c) = indexed_or_rgb(&mut iter) {
                        self.attrs.fg = c;
                    }
                }
                39 => self.attrs.fg = Color::Default,
                40..=47 => self.attrs.bg = Color::Indexed((code - 40) as u8),
                48 => {
                    if let Some(c) = indexed_or_rgb(&mut iter) {
                        self.attrs.bg = c;
                    }
                }
                49 => self.attrs.bg = Color::Default,
                _ => log::trace!("ignoring unknown SGR code {code}"),
            }
        }
    }

    /// `CSI ? Pm h`/`CSI ? Pm l` — DEC private mode set/reset, the
    /// subset tabulated in spec §4.2.
    fn set_private_mode(&mut self, mode: u16, enabled: bool) {
        match mode {
            1 => self.flags.set(ScreenFlags::APPLICATION_CURSOR, enabled),
            9 => self.flags.set(ScreenFlags::MOUSE_REPORTING_PRESS, enabled),
            25 => self.flags.set(ScreenFlags::HIDE_CURSOR, !enabled),
            1000 => self.flags.set(ScreenFlags::MOUSE_REPORTING_PRESS_RELEASE, enabled),
            1002 => self.flags.set(ScreenFlags::MOUSE_REPORTING_BUTTON_MOTION, enabled),
            1006 => self.flags.set(ScreenFlags::MOUSE_REPORTING_SGR_MODE, enabled),
            47 | 1047 => {
                if enabled {
                    self.enter_alt_screen(false);
                } else {
                    self.leave_alt_screen(false);
                }
            }
            1049 => {
                if enabled {
                    self.enter_alt_screen(true);
                } else {
                    self.leave_alt_screen(true);
                }
            }
            2004 => self.flags.set(ScreenFlags::BRACKETED_PASTE, enabled),
            _ => log::trace!("ignoring unknown private mode {mode}"),
        }
    }

    fn csi(&mut self, params: &Params, intermediates: &[u8], action: char) {
        let private = intermediates.first() == Some(&b'?');

        if private {
            match action {
                'h' => {
                    for group in params.iter() {
                        self.set_private_mode(group.first().copied().unwrap_or(0), true);
                    }
                }
                'l' => {
                    for group in params.iter() {
                        self.set_private_mode(group.first().copied().unwrap_or(0), false);
                    }
                }
                _ => log::trace!("ignoring unknown private CSI final {action:?}"),
            }
            return;
        }

        match action {
            'A' => self.grid_mut().move_up(param(params, 0, 1) as usize),
            'B' => self.grid_mut().move_down(param(params, 0, 1) as usize),
            'C' => self.grid_mut().move_forward(param(params, 0, 1) as usize),
            'D' => self.grid_mut().move_backward(param(params, 0, 1) as usize),
            'G' => {
                let col = param(params, 0, 1) as usize - 1;
                self.grid_mut().move_to_column(col);
            }
            'H' | 'f' => {
                let row = param(params, 0, 1) as usize - 1;
                let col = param(params, 1, 1) as usize - 1;
                self.grid_mut().move_to(row, col);
            }
            'J' => self.grid_mut().erase_display(erase_mode(param_zero_ok(params, 0, 0))),
            'K' => self.grid_mut().erase_line(erase_mode(param_zero_ok(params, 0, 0))),
            'L' => self.grid_mut().insert_lines(param(params, 0, 1) as usize),
            'M' => self.grid_mut().delete_lines(param(params, 0, 1) as usize),
            '@' => self.grid_mut().insert_characters(param(params, 0, 1) as usize),
            'P' => self.grid_mut().delete_characters(param(params, 0, 1) as usize),
            'X' => self.grid_mut().erase_characters(param(params, 0, 1) as usize),
            'S' => self.grid_mut().scroll_up(param(params, 0, 1) as usize),
            'T' => self.grid_mut().scroll_down(param(params, 0, 1) as usize),
            'r' => {
                let rows = self.grid().max_rows() as u16;
                let top = param(params, 0, 1) as usize - 1;
                let bottom = param(params, 1, rows) as usize - 1;
                let cols = self.grid().max_cols();
                self.grid_mut().set_scroll_region(top, bottom, 0, cols - 1);
            }
            'm' => self.apply_sgr(params),
            's' => self.grid_mut().save_cursor(),
            'u' => self.grid_mut().restore_cursor(),
            _ => log::trace!("ignoring unknown CSI final {action:?}"),
        }

        self.flags.insert(ScreenFlags::DIRTY);
    }

    fn esc(&mut self, intermediates: &[u8], byte: u8) {
        match (intermediates, byte) {
            (&[], b'7') => self.grid_mut().save_cursor(),
            (&[], b'8') => self.grid_mut().restore_cursor(),
            (&[], b'=') => self.flags.insert(ScreenFlags::APPLICATION_KEYPAD),
            (&[], b'>') => self.flags.remove(ScreenFlags::APPLICATION_KEYPAD),
            (&[], b'D') => self.grid_mut().move_down_or_scroll(),
            (&[], b'M') => self.grid_mut().move_up_or_scroll(),
            (&[], b'c') => *self = Self::new(self.grid().max_rows(), self.grid().max_cols()),
            _ => log::trace!("ignoring ESC sequence {intermediates:?} {byte:?}"),
        }
    }

    fn osc(&mut self, params: &[&[u8]]) {
        let Some((&selector, rest)) = params.split_first() else { return };
        let Ok(n) = std::str::from_utf8(selector).unwrap_or("").parse::<u32>() else { return };
        let text = rest
            .iter()
            .map(|s| String::from_utf8_lossy(s))
            .collect::<Vec<_>>()
            .join(";");

        match n {
            0 => {
                self.set_title(text.clone());
                self.set_icon_name(text);
            }
            1 => self.set_icon_name(text),
            2 => self.set_title(text),
            _ => log::trace!("ignoring unknown OSC {n}"),
        }
    }
}

fn erase_mode(selector: u16) -> EraseMode {
    match selector {
        1 => EraseMode::Above,
        2 | 3 => EraseMode::All,
        _ => EraseMode::Below,
    }
}

impl Perform for Screen {
    fn print(&mut self, c: char) {
        if !self.in_print_run {
            self.clear_phantom_on_batch_start();
            self.in_print_run = true;
        }
        self.print_char(c);
        self.flags.insert(ScreenFlags::DIRTY);
    }

    fn execute(&mut self, byte: u8) {
        self.in_print_run = false;
        match byte {
            0x07 => self.flags.insert(ScreenFlags::AUDIBLE_BELL),
            0x08 => self.grid_mut().backspace(),
            0x09 => self.grid_mut().tab(),
            0x0A | 0x0B | 0x0C => self.grid_mut().move_down_or_scroll(),
            0x0D => self.grid_mut().carriage_return(),
            _ => {}
        }
    }

    fn hook(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, _action: char) {
        self.in_print_run = false;
        // DCS (sixel, ReGIS, Kitty/iTerm image protocols) is out of scope.
    }

    fn put(&mut self, _byte: u8) {}

    fn unhook(&mut self) {}

    fn osc_dispatch(&mut self, params: &[&[u8]], _bell_terminated: bool) {
        self.in_print_run = false;
        self.osc(params);
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], _ignore: bool, action: char) {
        self.in_print_run = false;
        self.csi(params, intermediates, action);
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], _ignore: bool, byte: u8) {
        self.in_print_run = false;
        self.esc(intermediates, byte);
    }
}
