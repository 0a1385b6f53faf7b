use super::Color;

#[test]
fn default_is_default_variant() {
    assert_eq!(Color::default(), Color::Default);
}

#[test]
fn equality_is_structural() {
    assert_eq!(Color::Indexed(4), Color::Indexed(4));
    assert_ne!(Color::Indexed(4), Color::Indexed(5));
    assert_eq!(Color::Rgb(1, 2, 3), Color::Rgb(1, 2, 3));
    assert_ne!(Color::Indexed(1), Color::Rgb(1, 0, 0));
}
