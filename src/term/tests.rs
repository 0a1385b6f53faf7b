use super::{Screen, ScreenFlags};
use crate::color::Color;
use crate::index::Location;

#[test]
fn new_screen_has_full_viewport_and_default_attrs() {
    let screen = Screen::new(4, 10);
    assert_eq!(screen.grid().max_rows(), 4);
    assert_eq!(screen.grid().max_cols(), 10);
    assert!(!screen.is_alt_screen());
    assert_eq!(screen.flags(), ScreenFlags::empty());
}

#[test]
fn wrap_and_combining_mark() {
    // Scenario 1: window 2x3, "ab\u{0301}c" -> row 0 = "a", "b\u{0301}", "c".
    let mut screen = Screen::new(2, 3);
    screen.process_string("ab\u{0301}c".as_bytes());

    assert_eq!(screen.cell_at(0, 0).unwrap().as_str(), "a");
    assert_eq!(screen.cell_at(0, 1).unwrap().as_str(), "b\u{0301}");
    assert_eq!(screen.cell_at(0, 2).unwrap().as_str(), "c");
    assert_eq!(screen.grid().cur().row, 0);
    assert_eq!(screen.grid().cur().col, 3);
    assert!(!screen.grid().row_visible(0).unwrap().wrapped);
}

#[test]
fn scroll_into_scrollback_evicts_oldest_row() {
    // Scenario 2: window 2x1, default scrollback = 2 (== rows).
    let mut screen = Screen::new(2, 1);
    screen.process_string(b"A\nB\nC\nD\n");

    assert_eq!(screen.grid().row_count(), 2);
    assert_eq!(screen.cell_at(0, 0).unwrap().as_str(), "C");
    assert_eq!(screen.cell_at(1, 0).unwrap().as_str(), "D");

    screen.process_string(b"E\n");
    assert_eq!(screen.cell_at(0, 0).unwrap().as_str(), "D");
    assert_eq!(screen.cell_at(1, 0).unwrap().as_str(), "E");
}

#[test]
fn scroll_region_confines_scrolling_to_rows_2_and_3() {
    // Scenario 3: window 4x1. CSI 2;3 r sets region rows 2-3 (1-based),
    // i.e. visible rows 1-2. CSI 2;1 H puts the cursor at visible row 1.
    // Feeding "X\nY\nZ\n" (a single column, so a bare LF already lands at
    // column 0) scrolls only within the region: X scrolls out, leaving
    // Y atop Z; rows 0 and 3 never change.
    let mut screen = Screen::new(4, 1);
    screen.process_string(b"\x1b[2;3r\x1b[2;1H");
    screen.process_string(b"X\nY\nZ\n");

    assert!(screen.cell_at(0, 0).unwrap().is_empty());
    assert_eq!(screen.cell_at(1, 0).unwrap().as_str(), "Y");
    assert_eq!(screen.cell_at(2, 0).unwrap().as_str(), "Z");
    assert!(screen.cell_at(3, 0).unwrap().is_empty());
}

#[test]
fn alternate_buffer_round_trip_restores_primary() {
    // Scenario 4.
    let mut screen = Screen::new(3, 10);
    screen.process_string(b"hello");
    let cursor_before = screen.grid().cur();

    screen.process_string(b"\x1b[?1049h");
    assert!(screen.is_alt_screen());
    screen.process_string(b"world");
    assert_eq!(screen.cell_at(0, 0).unwrap().as_str(), "w");

    screen.process_string(b"\x1b[?1049l");
    assert!(!screen.is_alt_screen());
    assert_eq!(screen.cell_at(0, 0).unwrap().as_str(), "h");
    assert_eq!(screen.grid().cur(), cursor_before);
}

#[test]
fn sgr_formatted_round_trip() {
    // Scenario 5: "ESC[1;31mA ESC[0mB" serializes back to an equivalent
    // attribute-transition stream (ordering of codes within one
    // transition isn't required to match exactly).
    let mut screen = Screen::new(1, 2);
    screen.process_string(b"\x1b[1;31mA\x1b[0mB");

    let a = screen.cell_at(0, 0).unwrap();
    assert!(a.attrs.bold);
    assert_eq!(a.attrs.fg, Color::Indexed(1));
    let b = screen.cell_at(0, 1).unwrap();
    assert_eq!(b.attrs, crate::cell::CellAttrs::default());

    let out = screen.get_string_formatted(Location::new(0, 0), Location::new(0, 2));

    let mut replay = Screen::new(1, 2);
    replay.process_string(out.as_bytes());
    let replay_out = replay.get_string_formatted(Location::new(0, 0), Location::new(0, 2));
    assert_eq!(out, replay_out);
}

#[test]
fn incremental_parse_resumes_a_split_csi_sequence() {
    // Scenario 6: feed "\x1b[3" then "1mX". The CSI sequence is truncated
    // mid-parameter, so nothing is consumed (no attribute change yet);
    // the caller re-presents the withheld bytes together with the rest.
    let mut screen = Screen::new(1, 5);
    let first = b"\x1b[3";
    let consumed = screen.process_string(first);
    assert!(consumed < first.len());
    assert_eq!(screen.cell_at(0, 0).unwrap().as_str(), "");

    let mut second = first[consumed..].to_vec();
    second.extend_from_slice(b"1mX");
    let consumed2 = screen.process_string(&second);
    assert_eq!(consumed2, second.len());

    let cell = screen.cell_at(0, 0).unwrap();
    assert_eq!(cell.as_str(), "X");
    assert_eq!(cell.attrs.fg, Color::Indexed(1));
}

#[test]
fn process_string_reports_full_chunk_consumed_for_complete_input() {
    let mut screen = Screen::new(1, 5);
    let bytes = b"\x1b[1mAB";
    assert_eq!(screen.process_string(bytes), bytes.len());
}

#[test]
fn bell_sets_audible_bell_flag_until_consumed() {
    let mut screen = Screen::new(1, 1);
    screen.process_string(b"\x07");
    assert!(screen.flags().contains(ScreenFlags::AUDIBLE_BELL));

    let fired = screen.take_notifications();
    assert!(fired.contains(ScreenFlags::AUDIBLE_BELL));
    assert!(!screen.flags().contains(ScreenFlags::AUDIBLE_BELL));
}

#[test]
fn osc_0_sets_both_title_and_icon_name() {
    let mut screen = Screen::new(1, 1);
    screen.process_string(b"\x1b]0;my title\x07");
    assert_eq!(screen.title(), "my title");
    assert_eq!(screen.icon_name(), "my title");
    assert!(screen.take_notifications().contains(ScreenFlags::UPDATE_TITLE | ScreenFlags::UPDATE_ICON_NAME));
}

#[test]
fn osc_2_sets_title_only() {
    let mut screen = Screen::new(1, 1);
    screen.process_string(b"\x1b]2;only title\x07");
    assert_eq!(screen.title(), "only title");
    assert_eq!(screen.icon_name(), "");
}

#[test]
fn wide_char_occupies_two_columns_with_phantom() {
    let mut screen = Screen::new(1, 4);
    screen.process_string("好".as_bytes());
    let base = screen.cell_at(0, 0).unwrap();
    assert!(base.is_wide);
    assert_eq!(base.as_str(), "好");
    let phantom = screen.cell_at(0, 1).unwrap();
    assert!(phantom.is_empty());
    assert_eq!(screen.grid().cur().col, 2);
}

#[test]
fn overwriting_a_wide_cells_phantom_clears_the_stale_glyph() {
    let mut screen = Screen::new(1, 4);
    screen.process_string("好".as_bytes());
    screen.process_string(b"\x1b[1;2H"); // move to the phantom column
    screen.process_string(b"x");

    assert!(!screen.cell_at(0, 0).unwrap().is_wide);
    assert!(screen.cell_at(0, 0).unwrap().is_empty());
    assert_eq!(screen.cell_at(0, 1).unwrap().as_str(), "x");
}

#[test]
fn direct_show_string_api_bypasses_the_parser() {
    let mut screen = Screen::new(1, 5);
    screen.show_string_ascii(b"hi");
    assert_eq!(screen.cell_at(0, 0).unwrap().as_str(), "h");
    assert_eq!(screen.cell_at(0, 1).unwrap().as_str(), "i");
    assert!(screen.flags().contains(ScreenFlags::DIRTY));
}

#[test]
fn set_window_size_resizes_both_grids() {
    let mut screen = Screen::new(2, 2);
    screen.process_string(b"\x1b[?1049h");
    screen.set_window_size(3, 3);
    assert_eq!(screen.grid().max_rows(), 3);
    screen.process_string(b"\x1b[?1049l");
    assert_eq!(screen.grid().max_rows(), 3);
}

mod trailing_incomplete_boundary {
    use super::super::trailing_incomplete_boundary as boundary;

    #[test]
    fn plain_text_is_fully_consumed() {
        assert_eq!(boundary(b"hello"), 5);
    }

    #[test]
    fn truncated_csi_param_consumes_nothing() {
        assert_eq!(boundary(b"\x1b[3"), 0);
    }

    #[test]
    fn complete_csi_is_fully_consumed() {
        assert_eq!(boundary(b"\x1b[31m"), 5);
    }

    #[test]
    fn bare_esc_consumes_nothing() {
        assert_eq!(boundary(b"\x1b"), 0);
    }

    #[test]
    fn complete_single_byte_esc_sequence_is_consumed() {
        assert_eq!(boundary(b"\x1b7"), 2);
    }

    #[test]
    fn esc_with_intermediate_waits_for_final_byte() {
        assert_eq!(boundary(b"\x1b("), 0);
        assert_eq!(boundary(b"\x1b(B"), 3);
    }

    #[test]
    fn osc_without_terminator_consumes_nothing() {
        assert_eq!(boundary(b"\x1b]0;partial"), 0);
    }

    #[test]
    fn osc_terminated_by_bel_is_fully_consumed() {
        let bytes = b"\x1b]0;title\x07";
        assert_eq!(boundary(bytes), bytes.len());
    }

    #[test]
    fn osc_terminated_by_st_is_fully_consumed() {
        let bytes = b"\x1b]0;title\x1b\\";
        assert_eq!(boundary(bytes), bytes.len());
    }

    #[test]
    fn split_two_byte_utf8_character_consumes_nothing() {
        // U+00E9 'é' = 0xC3 0xA9; feed only the lead byte.
        assert_eq!(boundary(&[0xC3]), 0);
    }

    #[test]
    fn complete_utf8_character_is_consumed_and_trailing_text_too() {
        let mut bytes = "é".as_bytes().to_vec();
        bytes.extend_from_slice(b"x");
        assert_eq!(boundary(&bytes), bytes.len());
    }

    #[test]
    fn split_three_byte_utf8_character_consumes_only_the_prior_text() {
        // "a" + the first two bytes of '好' (U+597D, 3-byte UTF-8).
        let full = "好".as_bytes();
        let mut bytes = vec![b'a'];
        bytes.extend_from_slice(&full[..2]);
        assert_eq!(boundary(&bytes), 1);
    }
}
