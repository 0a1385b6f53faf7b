//! `Screen` mode and notification flags.
//!
//! Two kinds of bit live here side by side: sticky modes toggled by
//! DECSET/DECRST (`hide_cursor`, `application_keypad`, the mouse-reporting
//! variants, `bracketed_paste`) and transient notification bits the caller
//! is expected to consume and clear (`visual_bell`, `audible_bell`,
//! `update_title`, `update_icon_name`, `dirty`). The engine never clears
//! the transient bits itself — see `Screen::take_*`.

use bitflags::bitflags;

bitflags! {
    /// Bitflags for `Screen` mode and notification state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ScreenFlags: u32 {
        /// DECTCEM reset — cursor hidden.
        const HIDE_CURSOR                      = 1;
        /// DECKPAM/DECKPNM — application keypad mode.
        const APPLICATION_KEYPAD                = 1 << 1;
        /// DECCKM — application cursor keys.
        const APPLICATION_CURSOR                = 1 << 2;
        /// Mode 9 — X10 mouse reporting (press only).
        const MOUSE_REPORTING_PRESS             = 1 << 3;
        /// Mode 1000 — normal mouse tracking (press and release).
        const MOUSE_REPORTING_PRESS_RELEASE     = 1 << 4;
        /// Mode 1002 — button-event mouse tracking (press/release/drag).
        const MOUSE_REPORTING_BUTTON_MOTION     = 1 << 5;
        /// Mode 1006 — SGR extended mouse coordinate encoding.
        const MOUSE_REPORTING_SGR_MODE          = 1 << 6;
        /// Mode 2004 — bracketed paste.
        const BRACKETED_PASTE                   = 1 << 7;

        /// Transient: a visual bell was requested since the caller last
        /// consumed it. The engine never fires this on its own (no bell
        /// sequence maps to it in the recognized subset); it exists so a
        /// host layering DEC private visual-bell conventions on top has
        /// somewhere to raise it.
        const VISUAL_BELL    = 1 << 8;
        /// Transient: BEL was received.
        const AUDIBLE_BELL   = 1 << 9;
        /// Transient: the title buffer changed (OSC 0/2).
        const UPDATE_TITLE     = 1 << 10;
        /// Transient: the icon-name buffer changed (OSC 0/1).
        const UPDATE_ICON_NAME = 1 << 11;
        /// Transient: the grid was mutated by a non-empty print batch.
        const DIRTY             = 1 << 12;
    }
}

impl ScreenFlags {
    /// Bits that represent one-shot notifications rather than sticky
    /// mode state; cleared in a batch by `Screen::take_notifications`.
    pub const TRANSIENT: ScreenFlags = ScreenFlags::VISUAL_BELL
        .union(ScreenFlags::AUDIBLE_BELL)
        .union(ScreenFlags::UPDATE_TITLE)
        .union(ScreenFlags::UPDATE_ICON_NAME)
        .union(ScreenFlags::DIRTY);
}

#[cfg(test)]
mod tests;
