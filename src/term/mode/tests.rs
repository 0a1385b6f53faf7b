use super::ScreenFlags;

#[test]
fn default_has_no_flags_set() {
    assert_eq!(ScreenFlags::default(), ScreenFlags::empty());
}

#[test]
fn transient_mask_excludes_sticky_modes() {
    assert!(!ScreenFlags::TRANSIENT.contains(ScreenFlags::HIDE_CURSOR));
    assert!(!ScreenFlags::TRANSIENT.contains(ScreenFlags::APPLICATION_CURSOR));
    assert!(ScreenFlags::TRANSIENT.contains(ScreenFlags::DIRTY));
    assert!(ScreenFlags::TRANSIENT.contains(ScreenFlags::AUDIBLE_BELL));
    assert!(ScreenFlags::TRANSIENT.contains(ScreenFlags::UPDATE_TITLE));
    assert!(ScreenFlags::TRANSIENT.contains(ScreenFlags::UPDATE_ICON_NAME));
    assert!(ScreenFlags::TRANSIENT.contains(ScreenFlags::VISUAL_BELL));
}

#[test]
fn set_toggles_a_single_bit_without_disturbing_others() {
    let mut flags = ScreenFlags::HIDE_CURSOR | ScreenFlags::DIRTY;
    flags.set(ScreenFlags::HIDE_CURSOR, false);
    assert!(!flags.contains(ScreenFlags::HIDE_CURSOR));
    assert!(flags.contains(ScreenFlags::DIRTY));
}
